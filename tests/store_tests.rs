//! Concurrency tests for the in-memory URL store.
//!
//! These hammer a shared `UrlStore` from real OS threads and check that no
//! code is handed out twice, repeated URLs collapse to one record, and no
//! click increment is lost.

use snaplink::services::ShortCodeGenerator;
use snaplink::{AppError, UrlStore};
use std::collections::HashSet;
use std::sync::Barrier;
use std::thread;

const THREADS: usize = 16;

mod uniqueness_tests {
    use super::*;

    #[test]
    fn test_concurrent_shorten_distinct_urls_yields_unique_codes() {
        let store = UrlStore::default();
        let barrier = Barrier::new(THREADS);

        let codes: Vec<String> = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|t| {
                    let store = store.clone();
                    let barrier = &barrier;
                    s.spawn(move || {
                        barrier.wait();
                        (0..100)
                            .map(|i| {
                                store
                                    .shorten(&format!("https://example.com/{}/{}", t, i))
                                    .unwrap()
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let unique: HashSet<_> = codes.iter().collect();
        assert_eq!(codes.len(), THREADS * 100);
        assert_eq!(unique.len(), codes.len());
        assert_eq!(store.len(), codes.len());
    }

    #[test]
    fn test_tiny_code_space_never_hands_out_duplicates() {
        // 16 possible codes, so concurrent callers collide constantly.
        let generator = ShortCodeGenerator::new(2, 50).with_alphabet(&['a', 'b', 'c', 'd']);
        let store = UrlStore::new(generator);
        let barrier = Barrier::new(THREADS);

        let results: Vec<Result<String, AppError>> = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|t| {
                    let store = store.clone();
                    let barrier = &barrier;
                    s.spawn(move || {
                        barrier.wait();
                        store.shorten(&format!("https://tiny.example/{}", t))
                    })
                })
                .collect();

            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let issued: Vec<&String> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        let unique: HashSet<_> = issued.iter().collect();

        assert_eq!(unique.len(), issued.len());
        assert!(issued.len() <= 16);
        assert_eq!(store.len(), issued.len());

        for err in results.iter().filter_map(|r| r.as_ref().err()) {
            assert!(matches!(err, AppError::ShortCodeGenerationFailed { attempts: 50 }));
        }
    }
}

mod idempotence_tests {
    use super::*;

    #[test]
    fn test_concurrent_shorten_same_url_yields_one_record() {
        let store = UrlStore::default();
        let barrier = Barrier::new(THREADS);

        let codes: HashSet<String> = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    let store = store.clone();
                    let barrier = &barrier;
                    s.spawn(move || {
                        barrier.wait();
                        store.shorten("https://example.com/same").unwrap()
                    })
                })
                .collect();

            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(codes.len(), 1);
        assert_eq!(store.len(), 1);

        let code = codes.into_iter().next().unwrap();
        assert_eq!(store.resolve(&code).unwrap().original_url, "https://example.com/same");
    }
}

mod click_tests {
    use super::*;

    #[test]
    fn test_concurrent_clicks_are_not_lost() {
        let store = UrlStore::default();
        let code = store.shorten("https://www.python.org").unwrap();
        store.record_click(&code).unwrap();
        let before = store.stats(&code).unwrap().clicks;

        let per_thread = 500;
        let barrier = Barrier::new(THREADS);

        thread::scope(|s| {
            for _ in 0..THREADS {
                let store = store.clone();
                let code = code.as_str();
                let barrier = &barrier;
                s.spawn(move || {
                    barrier.wait();
                    for _ in 0..per_thread {
                        store.record_click(code).unwrap();
                    }
                });
            }
        });

        let after = store.stats(&code).unwrap().clicks;
        assert_eq!(after, before + (THREADS * per_thread) as u64);
    }

    #[test]
    fn test_stats_observed_during_clicks_are_monotonic() {
        let store = UrlStore::default();
        let code = store.shorten("https://example.com/watch").unwrap();
        let total = 2_000u64;

        thread::scope(|s| {
            let writer_store = store.clone();
            let writer_code = code.clone();
            s.spawn(move || {
                for _ in 0..total {
                    writer_store.record_click(&writer_code).unwrap();
                }
            });

            let reader_store = store.clone();
            let reader_code = code.clone();
            s.spawn(move || {
                let mut last = 0;
                loop {
                    let clicks = reader_store.stats(&reader_code).unwrap().clicks;
                    assert!(clicks >= last && clicks <= total);
                    last = clicks;
                    if clicks == total {
                        break;
                    }
                }
            });
        });

        assert_eq!(store.stats(&code).unwrap().clicks, total);
    }
}

mod contract_tests {
    use super::*;

    #[test]
    fn test_not_found_contract() {
        let store = UrlStore::default();
        store.shorten("https://example.com").unwrap();

        assert!(matches!(store.resolve("AAAAAA"), Err(AppError::UrlNotFound(_))));
        assert!(matches!(store.record_click("AAAAAA"), Err(AppError::UrlNotFound(_))));
        assert!(matches!(store.stats("AAAAAA"), Err(AppError::UrlNotFound(_))));
    }

    #[test]
    fn test_round_trip() {
        let store = UrlStore::default();

        for url in [
            "https://example.com/a",
            "http://example.com:8080/path?q=1#frag",
            "https://sub.example.com/",
        ] {
            let code = store.shorten(url).unwrap();
            assert!(store.contains(&code));
            assert_eq!(store.resolve(&code).unwrap().original_url, url);
        }
    }

    #[test]
    fn test_exhaustion_after_exactly_ten_attempts() {
        let generator = ShortCodeGenerator::new(1, 10).with_alphabet(&['Z']);
        let store = UrlStore::new(generator);
        store.shorten("https://first.example").unwrap();

        let err = store.shorten("https://second.example").unwrap_err();
        assert!(matches!(err, AppError::ShortCodeGenerationFailed { attempts: 10 }));
        assert_eq!(store.len(), 1);
    }
}
