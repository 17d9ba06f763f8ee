//! Scenario 5: concurrent start of 5 distinct libraries.

use crate::support::{new_harness, register_library, write_file};

#[tokio::test]
async fn five_concurrent_starts_all_succeed_then_cancel_all() {
    let harness = new_harness().await;
    let mut roots = Vec::new();
    let mut ids = vec!["lib-1".to_string()];
    write_file(&harness.root, "track.mp3", b"test audio data");

    for i in 0..4 {
        let root = tempfile::tempdir().unwrap();
        let id = format!("lib-extra-{i}");
        write_file(&root, "track.mp3", b"test audio data");
        register_library(&harness.pool, &id, &root).await;
        ids.push(id);
        roots.push(root);
    }

    let manager = harness.manager.clone();
    let starts = futures::future::join_all(
        ids.iter().map(|id| {
            let manager = manager.clone();
            let id = id.clone();
            async move { manager.start_scan(&id).await }
        }),
    )
    .await;
    for result in &starts {
        assert!(result.is_ok(), "every distinct library should start cleanly");
    }

    assert_eq!(manager.get_active_scan_count().await, 5);

    let cancelled = manager.cancel_all_scans().await;
    assert_eq!(cancelled, 5);

    let deadline = tokio::time::Instant::now() + std::time::Duration::from_secs(10);
    loop {
        if manager.get_active_scan_count().await == 0 {
            break;
        }
        assert!(tokio::time::Instant::now() < deadline, "scanners never drained");
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
}
