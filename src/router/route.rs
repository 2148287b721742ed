pub const CHAPTER_COUNT: u16 = 114;

/// A navigation address split into path segments and query pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteState {
    pub path_segments: Vec<String>,
    pub query_params: Vec<(String, String)>,
}

impl RouteState {
    /// Parse `#/a/b?k=v`; the leading `#` and slashes are optional.
    pub fn parse(address: &str) -> Self {
        let trimmed = address.trim();
        let trimmed = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let (path, query) = match trimmed.split_once('?') {
            Some((path, query)) => (path, query),
            None => (trimmed, ""),
        };
        let path_segments = path
            .split('/')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        let query_params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect();
        Self {
            path_segments,
            query_params,
        }
    }

    pub fn segment(&self, idx: usize) -> Option<&str> {
        self.path_segments.get(idx).map(String::as_str)
    }

    /// First value for `key`.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query_params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    ChapterList,
    ChapterDetail { number: u16, verse: Option<u32> },
    Bookmarks,
    Settings,
    Radio,
    Counter,
    NotFound,
}

impl Route {
    pub fn decode(state: &RouteState) -> Self {
        match state.segment(0) {
            None => Route::Home,
            Some("chapters" | "surahs") => Route::ChapterList,
            Some("chapter" | "surah") => match state.segment(1).and_then(parse_chapter_number) {
                Some(number) => Route::ChapterDetail {
                    number,
                    verse: state.query("a").and_then(parse_positive),
                },
                None => Route::NotFound,
            },
            Some("bookmarks") => Route::Bookmarks,
            Some("settings") => Route::Settings,
            Some("radio") => Route::Radio,
            Some("counter" | "tasbeeh") => Route::Counter,
            Some(_) => Route::NotFound,
        }
    }

    /// Canonical address for this route.
    pub fn address(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::ChapterList => "#/chapters".to_string(),
            Route::ChapterDetail { number, verse } => chapter_address(*number, *verse),
            Route::Bookmarks => "#/bookmarks".to_string(),
            Route::Settings => "#/settings".to_string(),
            Route::Radio => "#/radio".to_string(),
            Route::Counter => "#/counter".to_string(),
            Route::NotFound => "#/404".to_string(),
        }
    }

    pub fn needs_catalogue(&self) -> bool {
        matches!(self, Route::Home | Route::ChapterList)
    }
}

pub fn chapter_address(number: u16, verse: Option<u32>) -> String {
    match verse {
        Some(verse) => format!("#/chapter/{number}?a={verse}"),
        None => format!("#/chapter/{number}"),
    }
}

fn parse_chapter_number(raw: &str) -> Option<u16> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u16>()
        .ok()
        .filter(|n| (1..=CHAPTER_COUNT).contains(n))
}

fn parse_positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|v| *v > 0)
}
