/// Platform resolver adapters, one per marketplace
mod lcsc_page;
mod lcsc_resolver;
mod taobao_resolver;

pub use lcsc_page::{LcscPageExtractor, CONTENT_REGION_SELECTOR, LCSC_PLATFORM_NAME};
pub use lcsc_resolver::{
    LcscResolver, CODE_PLACEHOLDER, DEFAULT_LCSC_DETAIL_URL, LCSC_DISPLAY_NAME,
};
pub use taobao_resolver::{TaobaoResolver, TAOBAO_DISPLAY_NAME};
