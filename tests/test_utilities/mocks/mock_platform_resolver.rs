use component_resolver::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock PlatformResolver recognizing codes by prefix
///
/// Resolves to a record named after the resolver and counts its calls.
#[derive(Clone)]
pub struct MockPlatformResolver {
    name: String,
    prefix: String,
    calls: Arc<AtomicUsize>,
}

impl MockPlatformResolver {
    pub fn new(name: &str, prefix: &str) -> Self {
        Self {
            name: name.to_string(),
            prefix: prefix.to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PlatformResolver for MockPlatformResolver {
    fn name(&self) -> &str {
        &self.name
    }

    fn recognizes(&self, code: &str) -> bool {
        code.starts_with(&self.prefix)
    }

    fn resolve(&self, code: &str) -> ResolveResult<ComponentInfo> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut builder = ComponentInfo::builder(code, self.name.as_str());
        builder.name(format!("{} part", self.name));
        builder.build()
    }
}
