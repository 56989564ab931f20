mod helpers;

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::Ordering::SeqCst;

use helpers::*;

use vidash_types::VidashError;

#[tokio::test]
async fn join_preserves_length_and_order() {
    let mock = Arc::new(MockConnector {
        video_stats_fn: Some(Arc::new(|ids| {
            // Only two of the requested videos have counters.
            Ok(ids
                .iter()
                .filter(|id| *id == "vid-a" || *id == "vid-c")
                .map(|id| stats_row(id, 500))
                .collect())
        })),
        comments_fn: Some(Arc::new(|id, _| Ok(vec![comment(id, 1)]))),
        ..MockConnector::default()
    });
    let vd = orchestrator(Arc::clone(&mock));

    let refs = vec![
        wrapped_ref("vid-a"),
        plain_ref("vid-b"),
        malformed_ref(),
        plain_ref("vid-c"),
        wrapped_ref("vid-d"),
    ];
    let enriched = vd.enrich_videos(refs).await.unwrap();

    assert_eq!(enriched.len(), 5);
    assert_eq!(enriched[0].id, "vid-a");
    assert!(enriched[0].statistics.is_some());
    assert_eq!(enriched[1].id, "vid-b");
    assert!(enriched[1].statistics.is_none());
    // The malformed reference keeps its slot but nothing was fetched for it.
    assert_eq!(enriched[2].id, "");
    assert!(enriched[2].statistics.is_none());
    assert!(enriched[2].comments.is_empty());
    assert!(enriched[3].statistics.is_some());
    assert!(enriched[4].statistics.is_none());
}

#[tokio::test]
async fn statistics_are_fetched_in_one_batch_without_malformed_ids() {
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let seen_in_closure = Arc::clone(&seen);
    let mock = Arc::new(MockConnector {
        video_stats_fn: Some(Arc::new(move |ids| {
            seen_in_closure
                .lock()
                .expect("no poisoned lock in tests")
                .extend(ids.iter().cloned());
            Ok(ids.iter().map(|id| stats_row(id, 100)).collect())
        })),
        comments_fn: Some(Arc::new(|_, _| Ok(Vec::new()))),
        ..MockConnector::default()
    });
    let vd = orchestrator(Arc::clone(&mock));

    let refs = vec![plain_ref("vid-a"), malformed_ref(), wrapped_ref("vid-b")];
    vd.enrich_videos(refs).await.unwrap();

    assert_eq!(mock.stats_batch_calls.load(SeqCst), 1);
    assert_eq!(*seen.lock().unwrap(), vec!["vid-a", "vid-b"]);
}

#[tokio::test]
async fn comment_failure_is_isolated_to_its_video() {
    let mock = Arc::new(MockConnector {
        video_stats_fn: Some(Arc::new(|ids| {
            Ok(ids.iter().map(|id| stats_row(id, 100)).collect())
        })),
        comments_fn: Some(Arc::new(|id, _| {
            if id == "vid-broken" {
                Err(VidashError::upstream("mock", "comments disabled"))
            } else {
                Ok(vec![comment(id, 1)])
            }
        })),
        ..MockConnector::default()
    });
    let vd = orchestrator(mock);

    let refs = vec![
        plain_ref("vid-a"),
        plain_ref("vid-broken"),
        plain_ref("vid-c"),
    ];
    let enriched = vd.enrich_videos(refs).await.unwrap();

    assert_eq!(enriched[0].comments.len(), 1);
    assert!(enriched[1].comments.is_empty());
    assert_eq!(enriched[2].comments.len(), 1);
    // The failed comment fetch did not cost the video its statistics.
    assert!(enriched[1].statistics.is_some());
}

#[tokio::test]
async fn batch_failure_degrades_every_videos_statistics() {
    let mock = Arc::new(MockConnector {
        video_stats_fn: Some(Arc::new(|_| {
            Err(VidashError::upstream("mock", "quota exceeded"))
        })),
        comments_fn: Some(Arc::new(|id, _| Ok(vec![comment(id, 1)]))),
        ..MockConnector::default()
    });
    let vd = orchestrator(mock);

    let refs = vec![plain_ref("vid-a"), plain_ref("vid-b")];
    let enriched = vd.enrich_videos(refs).await.unwrap();

    assert_eq!(enriched.len(), 2);
    assert!(enriched.iter().all(|v| v.statistics.is_none()));
    assert!(enriched.iter().all(|v| v.comments.len() == 1));
}

#[tokio::test]
async fn empty_input_makes_no_provider_calls() {
    let mock = Arc::new(MockConnector {
        video_stats_fn: Some(Arc::new(|ids| {
            Ok(ids.iter().map(|id| stats_row(id, 100)).collect())
        })),
        comments_fn: Some(Arc::new(|id, _| Ok(vec![comment(id, 1)]))),
        ..MockConnector::default()
    });
    let vd = orchestrator(Arc::clone(&mock));

    let enriched = vd.enrich_videos(Vec::new()).await.unwrap();

    assert!(enriched.is_empty());
    assert_eq!(mock.stats_batch_calls.load(SeqCst), 0);
    assert_eq!(mock.comments_calls.load(SeqCst), 0);
}

#[tokio::test]
async fn all_malformed_input_skips_the_batch_call() {
    let mock = Arc::new(MockConnector {
        video_stats_fn: Some(Arc::new(|ids| {
            Ok(ids.iter().map(|id| stats_row(id, 100)).collect())
        })),
        comments_fn: Some(Arc::new(|id, _| Ok(vec![comment(id, 1)]))),
        ..MockConnector::default()
    });
    let vd = orchestrator(Arc::clone(&mock));

    let enriched = vd
        .enrich_videos(vec![malformed_ref(), malformed_ref()])
        .await
        .unwrap();

    assert_eq!(enriched.len(), 2);
    assert_eq!(mock.stats_batch_calls.load(SeqCst), 0);
    assert_eq!(mock.comments_calls.load(SeqCst), 0);
}
