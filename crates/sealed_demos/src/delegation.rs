//! Delegation by composition: wrappers own the delegate and forward each
//! call explicitly.

use std::io::{self, Write};

use crate::DemoResult;

pub fn run(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "=== Delegation ===")?;
    writeln!(out)?;
    loggers(out)?;
    cached_repository(out)?;
    Ok(())
}

/// Something that can write a message.
pub trait Printer {
    fn print(&self, out: &mut dyn Write, message: &str) -> io::Result<()>;
}

pub struct ConsolePrinter;

impl Printer for ConsolePrinter {
    fn print(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        writeln!(out, "[Console] {message}")
    }
}

pub struct FilePrinter;

impl Printer for FilePrinter {
    fn print(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        writeln!(out, "[File] {message} (saved to file)")
    }
}

/// Prefixes messages with a level, then hands them to its printer.
pub struct Logger<P> {
    printer: P,
}

impl<P: Printer> Logger<P> {
    pub fn new(printer: P) -> Self {
        Logger { printer }
    }

    pub fn log(&self, out: &mut dyn Write, level: &str, message: &str) -> io::Result<()> {
        self.print(out, &format!("[{level}] {message}"))
    }
}

impl<P: Printer> Printer for Logger<P> {
    fn print(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        self.printer.print(out, message)
    }
}

fn loggers(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "--- Forwarding to a printer ---")?;
    Logger::new(ConsolePrinter).log(out, "INFO", "Application started")?;
    Logger::new(FilePrinter).log(out, "ERROR", "Database connection failed")?;
    writeln!(out)?;
    Ok(())
}

/// Minimal storage interface.
pub trait Repository<T> {
    fn save(&mut self, item: T);
    fn find_all(&mut self) -> Vec<T>;
}

#[derive(Debug, Default)]
pub struct InMemoryRepository<T> {
    items: Vec<T>,
}

impl<T: Clone> Repository<T> for InMemoryRepository<T> {
    fn save(&mut self, item: T) {
        self.items.push(item);
    }

    fn find_all(&mut self) -> Vec<T> {
        self.items.clone()
    }
}

/// Caches `find_all` until the next `save`.
#[derive(Debug)]
pub struct CachedRepository<T, R> {
    delegate: R,
    cache: Option<Vec<T>>,
}

impl<T, R> CachedRepository<T, R> {
    pub fn new(delegate: R) -> Self {
        CachedRepository {
            delegate,
            cache: None,
        }
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }
}

impl<T: Clone, R: Repository<T>> Repository<T> for CachedRepository<T, R> {
    fn save(&mut self, item: T) {
        self.delegate.save(item);
        self.cache = None;
    }

    fn find_all(&mut self) -> Vec<T> {
        if let Some(cached) = &self.cache {
            tracing::debug!(items = cached.len(), "repository cache hit");
            return cached.clone();
        }
        tracing::debug!("repository cache miss");
        let items = self.delegate.find_all();
        self.cache = Some(items.clone());
        items
    }
}

fn cached_repository(out: &mut dyn Write) -> DemoResult<()> {
    writeln!(out, "--- Caching wrapper ---")?;

    let mut repo = CachedRepository::new(InMemoryRepository::default());
    repo.save("Item 1".to_string());
    repo.save("Item 2".to_string());

    for attempt in ["First", "Second"] {
        writeln!(out, "{attempt} find_all:")?;
        if repo.is_cached() {
            writeln!(out, "  Cache hit!")?;
        } else {
            writeln!(out, "  Cache miss - fetching from delegate")?;
        }
        writeln!(out, "[{}]", repo.find_all().join(", "))?;
    }

    repo.save("Item 3".to_string());
    writeln!(out, "After save, cached: {}", repo.is_cached())?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests;
