use crate::adapters::outbound::network::HttpPageFetcher;
use crate::adapters::outbound::platforms::{LcscResolver, TaobaoResolver};
use crate::application::dto::ResolverSettings;
use crate::resolution::services::ResolverRegistry;
use crate::shared::Result;

/// Factory for the default resolver registry
///
/// Registration order is the dispatch order: LCSC first, then Taobao.
/// The two patterns (`[Cc]\d+` and `\d{12,13}`) do not overlap today; if a
/// future platform overlaps, whichever is registered first here wins.
pub struct RegistryFactory;

impl RegistryFactory {
    /// Builds the registry described by the settings
    ///
    /// # Errors
    /// Returns an error if the settings are invalid or the HTTP client
    /// cannot be constructed
    pub fn create(settings: &ResolverSettings) -> Result<ResolverRegistry> {
        settings.validate()?;

        let fetcher = HttpPageFetcher::with_settings(settings.timeout, &settings.user_agent)?;
        let mut registry = ResolverRegistry::new();
        registry.register(Box::new(LcscResolver::with_detail_url(
            fetcher,
            &settings.lcsc_detail_url,
        )?));

        if settings.enable_taobao {
            registry.register(Box::new(TaobaoResolver::new()?));
        }

        Ok(registry)
    }
}
