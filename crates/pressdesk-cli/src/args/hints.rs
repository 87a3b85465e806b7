pub mod cmd {
    pub const LIST: &str = "pressdesk list";
    pub const LIST_DRAFTS: &str = "pressdesk list --tab drafts";
    pub const LIST_TRASHED: &str = "pressdesk list --tab trashed";
    pub const CREATE: &str =
        "pressdesk create --title <TITLE> --category <CATEGORY> --content-file <PATH>";
    pub const PREVIEW: &str = "pressdesk preview";
    pub const DASHBOARD: &str = "pressdesk dashboard";
    pub const CONFIG_SHOW: &str = "pressdesk config show";
    pub const CONFIG_INIT: &str = "pressdesk config init";
}

pub mod fmt {
    pub fn show(id: impl std::fmt::Display) -> String {
        format!("pressdesk show {}", id)
    }

    pub fn delete(id: impl std::fmt::Display) -> String {
        format!("pressdesk delete {}", id)
    }

    pub fn preview_page(page: usize) -> String {
        format!("pressdesk preview --page {}", page)
    }
}
