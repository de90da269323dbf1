use crate::ports::outbound::PlatformResolver;
use crate::resolution::domain::ComponentInfo;
use crate::shared::{ResolveResult, Result};
use regex::Regex;

/// Display name of the Taobao platform
pub const TAOBAO_DISPLAY_NAME: &str = "淘宝";

/// Taobao item IDs are purely numeric, 12 or 13 ASCII digits
const TAOBAO_ID_PATTERN: &str = r"^[0-9]{12,13}$";

/// TaobaoResolver adapter producing a synthetic record without I/O
///
/// Taobao has no scrapable public item page, so this resolver builds a
/// deterministic placeholder from the item ID. It is also handy for
/// exercising dispatch offline.
pub struct TaobaoResolver {
    pattern: Regex,
}

impl TaobaoResolver {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(TAOBAO_ID_PATTERN)?,
        })
    }

    /// Public item page for an ID
    pub fn item_url(id: &str) -> String {
        format!("https://item.taobao.com/item.htm?id={}", id)
    }
}

impl PlatformResolver for TaobaoResolver {
    fn name(&self) -> &str {
        TAOBAO_DISPLAY_NAME
    }

    fn recognizes(&self, code: &str) -> bool {
        self.pattern.is_match(code.trim())
    }

    fn resolve(&self, code: &str) -> ResolveResult<ComponentInfo> {
        let id = code.trim();
        let mut builder = ComponentInfo::builder(id, TAOBAO_DISPLAY_NAME);
        builder
            .name("淘宝元件")
            .description(format!("从淘宝导入 (ID: {})", id))
            .platform_url(Self::item_url(id));
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_item_ids() {
        let resolver = TaobaoResolver::new().unwrap();
        assert!(resolver.recognizes("123456789012"));
        assert!(resolver.recognizes("1234567890123"));
        assert!(resolver.recognizes(" 123456789012 "));
    }

    #[test]
    fn test_rejects_other_shapes() {
        let resolver = TaobaoResolver::new().unwrap();
        assert!(!resolver.recognizes("12345678901"));
        assert!(!resolver.recognizes("12345678901234"));
        assert!(!resolver.recognizes("C2040"));
        assert!(!resolver.recognizes("C12345678901"));
        assert!(!resolver.recognizes("12345678901a"));
        assert!(!resolver.recognizes(""));
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        let resolver = TaobaoResolver::new().unwrap();
        assert!(!resolver.recognizes("１２３４５６７８９０１２"));
        assert!(!resolver.recognizes("١٢٣٤٥٦٧٨٩٠١٢"));
        assert!(!resolver.recognizes("12345678901２"));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let resolver = TaobaoResolver::new().unwrap();
        let info = resolver.resolve("123456789012").unwrap();

        assert_eq!(info.name(), "淘宝元件");
        assert_eq!(info.platform_code(), "123456789012");
        assert_eq!(info.platform_name(), TAOBAO_DISPLAY_NAME);
        assert_eq!(
            info.platform_url(),
            Some("https://item.taobao.com/item.htm?id=123456789012")
        );
        assert_eq!(info.description(), Some("从淘宝导入 (ID: 123456789012)"));
        assert_eq!(resolver.resolve("123456789012").unwrap(), info);
    }
}
