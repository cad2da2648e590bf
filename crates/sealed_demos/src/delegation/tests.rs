use super::*;
use pretty_assertions::assert_eq;

/// Counts how often the wrapped repository is actually read.
#[derive(Default)]
struct CountingRepository {
    inner: InMemoryRepository<i64>,
    reads: usize,
}

impl Repository<i64> for CountingRepository {
    fn save(&mut self, item: i64) {
        self.inner.save(item);
    }

    fn find_all(&mut self) -> Vec<i64> {
        self.reads += 1;
        self.inner.find_all()
    }
}

#[test]
fn test_cache_serves_repeated_reads() {
    let mut repo = CachedRepository::new(CountingRepository::default());
    repo.save(1);
    repo.save(2);

    assert_eq!(repo.find_all(), vec![1, 2]);
    assert_eq!(repo.find_all(), vec![1, 2]);
    assert_eq!(repo.delegate.reads, 1);
}

#[test]
fn test_save_invalidates_cache() {
    let mut repo = CachedRepository::new(CountingRepository::default());
    repo.save(1);
    assert_eq!(repo.find_all(), vec![1]);
    assert!(repo.is_cached());

    repo.save(2);
    assert!(!repo.is_cached());
    assert_eq!(repo.find_all(), vec![1, 2]);
    assert_eq!(repo.delegate.reads, 2);
}

#[test]
fn test_logger_forwards_to_printer() {
    let mut buf = Vec::new();
    let logger = Logger::new(ConsolePrinter);
    logger.log(&mut buf, "WARN", "disk almost full").unwrap();
    logger.print(&mut buf, "raw").unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "[Console] [WARN] disk almost full\n[Console] raw\n"
    );
}
