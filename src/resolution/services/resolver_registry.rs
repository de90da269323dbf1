use crate::ports::outbound::PlatformResolver;
use crate::resolution::domain::ComponentInfo;
use crate::shared::error::ResolveError;
use crate::shared::ResolveResult;

/// Ordered set of platform resolvers
///
/// Dispatch is first-match: the first resolver (in registration order) whose
/// predicate accepts the code handles it, and its outcome is final. If two
/// platforms' patterns overlap, registration order breaks the tie.
///
/// Registration takes `&mut self`, so it cannot race with `resolve`; once the
/// registry is shared (`&ResolverRegistry`, `Arc<ResolverRegistry>`) it is
/// read-only and safe for concurrent use.
#[derive(Default)]
pub struct ResolverRegistry {
    resolvers: Vec<Box<dyn PlatformResolver>>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a resolver to the end of the dispatch order
    pub fn register(&mut self, resolver: Box<dyn PlatformResolver>) {
        self.resolvers.push(resolver);
    }

    /// Builder-style variant of [`register`](Self::register)
    pub fn with(mut self, resolver: Box<dyn PlatformResolver>) -> Self {
        self.register(resolver);
        self
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Routes the code to the first resolver that recognizes it
    ///
    /// # Errors
    /// - `NoResolversRegistered` if the registry is empty
    /// - `NoResolverMatched` if no resolver recognizes the code
    /// - whatever the chosen resolver returns; later resolvers are not tried
    pub fn resolve(&self, code: &str) -> ResolveResult<ComponentInfo> {
        if self.resolvers.is_empty() {
            return Err(ResolveError::NoResolversRegistered);
        }

        let trimmed = code.trim();
        match self.resolvers.iter().find(|r| r.recognizes(trimmed)) {
            Some(resolver) => resolver.resolve(trimmed),
            None => Err(ResolveError::NoResolverMatched {
                code: trimmed.to_string(),
                supported: self.list_platforms().join(", "),
            }),
        }
    }

    /// Display names of registered resolvers, in registration order
    pub fn list_platforms(&self) -> Vec<String> {
        self.resolvers.iter().map(|r| r.name().to_string()).collect()
    }

    /// Names of every resolver that recognizes the code, in dispatch order.
    /// More than one entry means the code is ambiguous and the first wins.
    pub fn matching_platforms(&self, code: &str) -> Vec<String> {
        let trimmed = code.trim();
        self.resolvers
            .iter()
            .filter(|r| r.recognizes(trimmed))
            .map(|r| r.name().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct PrefixResolver {
        name: &'static str,
        prefix: &'static str,
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl PrefixResolver {
        fn boxed(name: &'static str, prefix: &'static str) -> (Box<Self>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let resolver = Box::new(Self {
                name,
                prefix,
                calls: Arc::clone(&calls),
                fail: false,
            });
            (resolver, calls)
        }
    }

    impl PlatformResolver for PrefixResolver {
        fn name(&self) -> &str {
            self.name
        }

        fn recognizes(&self, code: &str) -> bool {
            code.starts_with(self.prefix)
        }

        fn resolve(&self, code: &str) -> ResolveResult<ComponentInfo> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ResolveError::UnexpectedStatus {
                    platform: self.name.to_string(),
                    url: format!("https://example.com/{}", code),
                    status: 404,
                });
            }
            let mut builder = ComponentInfo::builder(code, self.name);
            builder.name(format!("{} part", self.name));
            builder.build()
        }
    }

    #[test]
    fn test_resolve_empty_registry() {
        let registry = ResolverRegistry::new();
        assert!(matches!(
            registry.resolve(""),
            Err(ResolveError::NoResolversRegistered)
        ));
        assert!(matches!(
            registry.resolve("C2040"),
            Err(ResolveError::NoResolversRegistered)
        ));
    }

    #[test]
    fn test_resolve_no_match() {
        let (a, _) = PrefixResolver::boxed("A", "A");
        let registry = ResolverRegistry::new().with(a);

        match registry.resolve("") {
            Err(ResolveError::NoResolverMatched { code, supported }) => {
                assert_eq!(code, "");
                assert_eq!(supported, "A");
            }
            other => panic!("expected NoResolverMatched, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let (a, a_calls) = PrefixResolver::boxed("A", "X");
        let (b, b_calls) = PrefixResolver::boxed("B", "X");
        let registry = ResolverRegistry::new().with(a).with(b);

        for _ in 0..3 {
            let info = registry.resolve("X42").unwrap();
            assert_eq!(info.platform_name(), "A");
        }
        assert_eq!(a_calls.load(Ordering::SeqCst), 3);
        assert_eq!(b_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_resolve_no_fallback_on_failure() {
        let calls_a = Arc::new(AtomicUsize::new(0));
        let failing = Box::new(PrefixResolver {
            name: "A",
            prefix: "X",
            calls: Arc::clone(&calls_a),
            fail: true,
        });
        let (b, b_calls) = PrefixResolver::boxed("B", "X");
        let registry = ResolverRegistry::new().with(failing).with(b);

        assert!(matches!(
            registry.resolve("X1"),
            Err(ResolveError::UnexpectedStatus { status: 404, .. })
        ));
        assert_eq!(calls_a.load(Ordering::SeqCst), 1);
        assert_eq!(b_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_resolve_skips_non_matching() {
        let (a, a_calls) = PrefixResolver::boxed("A", "A");
        let (b, _) = PrefixResolver::boxed("B", "B");
        let registry = ResolverRegistry::new().with(a).with(b);

        let info = registry.resolve("  B7 ").unwrap();
        assert_eq!(info.platform_name(), "B");
        assert_eq!(info.platform_code(), "B7");
        assert_eq!(a_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_list_platforms_in_registration_order() {
        let (a, _) = PrefixResolver::boxed("A", "A");
        let (b, _) = PrefixResolver::boxed("B", "B");
        let (c, _) = PrefixResolver::boxed("C", "C");
        let mut registry = ResolverRegistry::new();
        registry.register(c);
        registry.register(a);
        registry.register(b);

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.list_platforms(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_matching_platforms_reports_ambiguity() {
        let (a, _) = PrefixResolver::boxed("A", "X");
        let (b, _) = PrefixResolver::boxed("B", "X1");
        let (c, _) = PrefixResolver::boxed("C", "Y");
        let registry = ResolverRegistry::new().with(a).with(b).with(c);

        assert_eq!(registry.matching_platforms("X1"), vec!["A", "B"]);
        assert_eq!(registry.matching_platforms("X2"), vec!["A"]);
        assert!(registry.matching_platforms("Z").is_empty());
    }

    #[test]
    fn test_registry_shared_across_threads() {
        let (a, a_calls) = PrefixResolver::boxed("A", "A");
        let registry = Arc::new(ResolverRegistry::new().with(a));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.resolve(&format!("A{}", i)).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().platform_name(), "A");
        }
        assert_eq!(a_calls.load(Ordering::SeqCst), 4);
    }
}
