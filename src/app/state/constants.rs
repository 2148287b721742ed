use iced::widget::scrollable::Id as ScrollId;
use iced::widget::text_input::Id as InputId;
use once_cell::sync::Lazy;
use std::time::Duration;

pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));
pub(crate) static QUICK_SEARCH_ID: Lazy<InputId> = Lazy::new(|| InputId::new("quick-search"));
pub(crate) const TICK_INTERVAL: Duration = Duration::from_millis(250);
/// Minimum gap between scroll-driven reading position writes.
pub(crate) const LAST_READ_THROTTLE: Duration = Duration::from_millis(250);
pub(crate) const HISTORY_LIMIT: usize = 50;
pub(crate) const MAX_TOASTS: usize = 4;
pub(crate) const APP_TITLE: &str = "القرآن الكريم";
pub(crate) const APP_SUBTITLE: &str = "قراءة • استماع • مفضلة • راديو • سبحة";
pub(crate) const LOADING_SUBTITLE: &str = "تحميل البيانات…";
pub(crate) const FAILED_SUBTITLE: &str = "تعذّر تحميل البيانات";
