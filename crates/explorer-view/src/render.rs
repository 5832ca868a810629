//! What a single item looks like in a given view mode.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use explorer_entity::Item;

use crate::file_type::{FileTypeRegistry, initials};
use crate::view_mode::{Layout, Metrics, ViewMode};

/// Folder fill used when the caller does not pick one.
pub const DEFAULT_FOLDER_COLOR: &str = "#FFA500";
/// Top stripe of a file icon whose type has no colour.
pub const DEFAULT_FILE_ACCENT: &str = "#9ca3af";

const BADGE_BACKGROUND: &str = "#ffffff";
const BADGE_TEXT_ON_COLOR: &str = "#ffffff";
const BADGE_TEXT_PLAIN: &str = "#000000";

/// The icon drawn for an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Glyph {
    Folder {
        color: String,
    },
    File {
        /// Stripe colour at the top of the page.
        accent: String,
        badge: Badge,
    },
}

/// Content drawn in the middle of a file icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Badge {
    /// A registered icon tinted with the type colour.
    Icon { icon: String, color: Option<String> },
    /// Letters derived from the file key.
    Initials {
        text: String,
        background: String,
        foreground: String,
        bordered: bool,
    },
}

/// The `Modified`, `Type` and `Creator` cells of the details table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailColumns {
    pub modified: String,
    pub type_label: String,
    pub creator: String,
}

/// Presentation of one item; a pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedItem {
    pub id: Uuid,
    pub name: String,
    pub layout: Layout,
    pub metrics: Metrics,
    pub glyph: Glyph,
    /// Opener handle for files whose type is registered.
    pub opener: Option<String>,
    /// Only filled in the details layout.
    pub details: Option<DetailColumns>,
}

impl RenderedItem {
    /// Cells in [`Layout::DETAILS_COLUMNS`] order, when in details layout.
    pub fn detail_row(&self) -> Option<[&str; 4]> {
        self.details.as_ref().map(|d| {
            [
                self.name.as_str(),
                d.modified.as_str(),
                d.type_label.as_str(),
                d.creator.as_str(),
            ]
        })
    }
}

/// Render `item` for `mode`. `folder_color` falls back to
/// [`DEFAULT_FOLDER_COLOR`].
pub fn render(
    item: &Item,
    mode: ViewMode,
    file_types: &FileTypeRegistry,
    folder_color: Option<&str>,
) -> RenderedItem {
    let file_type = item
        .file_key
        .as_deref()
        .filter(|_| !item.is_folder)
        .and_then(|key| file_types.resolve(key));

    let glyph = if item.is_folder {
        Glyph::Folder {
            color: folder_color.unwrap_or(DEFAULT_FOLDER_COLOR).to_string(),
        }
    } else {
        let color = file_type.and_then(|t| t.color.clone());
        let badge = match file_type.and_then(|t| t.icon.clone()) {
            Some(icon) => Badge::Icon {
                icon,
                color: color.clone(),
            },
            None => Badge::Initials {
                text: item.file_key.as_deref().map(initials).unwrap_or_default(),
                background: color.clone().unwrap_or_else(|| BADGE_BACKGROUND.to_string()),
                foreground: if color.is_some() {
                    BADGE_TEXT_ON_COLOR
                } else {
                    BADGE_TEXT_PLAIN
                }
                .to_string(),
                bordered: color.is_none(),
            },
        };
        Glyph::File {
            accent: color.unwrap_or_else(|| DEFAULT_FILE_ACCENT.to_string()),
            badge,
        }
    };

    let layout = mode.layout();
    let details = (layout == Layout::Details).then(|| DetailColumns {
        modified: item.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        type_label: type_label(item, file_type.map(|t| t.name.as_str())),
        creator: item.created_by.clone(),
    });

    RenderedItem {
        id: item.id,
        name: item.name.clone(),
        layout,
        metrics: mode.metrics(),
        glyph,
        opener: file_type.map(|t| t.opener.clone()),
        details,
    }
}

fn type_label(item: &Item, type_name: Option<&str>) -> String {
    if item.is_folder {
        "Folder".to_string()
    } else {
        type_name.unwrap_or("File").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_type::FileType;
    use chrono::{TimeZone, Utc};

    fn item(name: &str, is_folder: bool, file_key: Option<&str>) -> Item {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        Item {
            id: Uuid::new_v4(),
            path: format!("home/{name}"),
            is_folder,
            file_key: file_key.map(str::to_string),
            parent_folder_id: Some(Uuid::new_v4()),
            name: name.to_string(),
            created_by: "alice".to_string(),
            created_at: at,
            updated_by: "alice".to_string(),
            updated_at: at,
        }
    }

    fn registry() -> FileTypeRegistry {
        FileTypeRegistry::from_types([
            FileType::new("course", "Course", "CourseComponent")
                .with_icon("book-open")
                .with_color("#3b82f6"),
            FileType::new("final-exam", "Exam", "ExamComponent").with_color("#ef4444"),
        ])
        .unwrap()
    }

    #[test]
    fn test_folder_uses_default_color() {
        let rendered = render(&item("Docs", true, None), ViewMode::Large, &registry(), None);
        assert_eq!(
            rendered.glyph,
            Glyph::Folder {
                color: "#FFA500".to_string()
            }
        );
        assert_eq!(rendered.metrics.icon_size, 64);
        assert!(rendered.details.is_none());

        let custom = render(&item("Docs", true, None), ViewMode::Large, &registry(), Some("#123456"));
        assert_eq!(
            custom.glyph,
            Glyph::Folder {
                color: "#123456".to_string()
            }
        );
    }

    #[test]
    fn test_registered_icon() {
        let rendered = render(&item("Intro", false, Some("course")), ViewMode::Medium, &registry(), None);
        let Glyph::File { accent, badge } = rendered.glyph else {
            panic!("expected a file glyph");
        };
        assert_eq!(accent, "#3b82f6");
        assert!(matches!(badge, Badge::Icon { ref icon, .. } if icon == "book-open"));
        assert_eq!(rendered.opener.as_deref(), Some("CourseComponent"));
    }

    #[test]
    fn test_initials_badge_with_and_without_color() {
        let colored = render(&item("Final", false, Some("final-exam")), ViewMode::Small, &registry(), None);
        let Glyph::File { badge, .. } = colored.glyph else {
            panic!("expected a file glyph");
        };
        assert_eq!(
            badge,
            Badge::Initials {
                text: "FE".to_string(),
                background: "#ef4444".to_string(),
                foreground: "#ffffff".to_string(),
                bordered: false,
            }
        );

        let unknown = render(&item("Quiz", false, Some("quiz")), ViewMode::Small, &registry(), None);
        let Glyph::File { accent, badge } = unknown.glyph else {
            panic!("expected a file glyph");
        };
        assert_eq!(accent, "#9ca3af");
        assert_eq!(
            badge,
            Badge::Initials {
                text: "QU".to_string(),
                background: "#ffffff".to_string(),
                foreground: "#000000".to_string(),
                bordered: true,
            }
        );
        assert!(unknown.opener.is_none());
    }

    #[test]
    fn test_details_columns() {
        let registry = registry();
        let folder = render(&item("Docs", true, None), ViewMode::Details, &registry, None);
        let course = render(&item("Intro", false, Some("course")), ViewMode::Details, &registry, None);
        let plain = render(&item("Misc", false, Some("quiz")), ViewMode::Details, &registry, None);

        assert_eq!(
            folder.detail_row(),
            Some(["Docs", "2024-03-05 14:07:09", "Folder", "alice"])
        );
        assert_eq!(course.detail_row().unwrap()[2], "Course");
        assert_eq!(plain.detail_row().unwrap()[2], "File");
        assert_eq!(folder.layout, Layout::Details);
    }

    #[test]
    fn test_list_mode_has_no_details() {
        let rendered = render(&item("Docs", true, None), ViewMode::List, &registry(), None);
        assert_eq!(rendered.layout, Layout::List);
        assert_eq!(rendered.metrics.item_width, None);
        assert!(rendered.detail_row().is_none());
    }
}
