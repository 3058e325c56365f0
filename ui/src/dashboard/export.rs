//! CSV download of the filtered records.

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::core::error::{DataError, Result};
use crate::data::{SalaryRecord, WorkingSubset};
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Done(String),
    Error(String),
}

impl ExportStatus {
    fn from_outcome(outcome: Result<Option<String>>) -> Self {
        match outcome {
            Ok(Some(path)) => Self::Done(t!("export-done-path", path = path)),
            Ok(None) => Self::Done(t!("export-done-download")),
            Err(err) => Self::Error(t!("export-error", error = err.to_string())),
        }
    }

    /// `(class, message)` of the status line, if one is shown.
    fn feedback(&self) -> Option<(&'static str, String)> {
        match self {
            Self::Idle => None,
            Self::Done(message) => Some((
                "export-panel__status export-panel__status--success",
                format!("✅ {message}"),
            )),
            Self::Error(err) => Some((
                "export-panel__status export-panel__status--error",
                format!("⚠️ {err}"),
            )),
        }
    }
}

/// The export runs synchronously inside the click handler.
#[component]
pub fn ExportPanel(subset: WorkingSubset) -> Element {
    let mut status = use_signal(|| ExportStatus::Idle);
    let feedback = status.read().feedback();

    let on_export = {
        let subset = subset.clone();
        move |_| status.set(ExportStatus::from_outcome(export_subset(&subset)))
    };

    rsx! {
        div { class: "export-panel",
            button {
                r#type: "button",
                class: "button button--primary",
                disabled: subset.is_empty(),
                onclick: on_export,
                {t!("export-button")}
            }
            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

fn export_subset(subset: &WorkingSubset) -> Result<Option<String>> {
    let bytes = build_csv(subset.iter())?;
    let filename = format!("salarios-{}.csv", timestamp_slug());
    match download_bytes(&filename, "text/csv", bytes) {
        Ok(delivery) => {
            info!(rows = subset.len(), %filename, "exported filtered records");
            Ok(delivery)
        }
        Err(err) => {
            warn!(%err, %filename, "export failed");
            Err(err)
        }
    }
}

/// Serialize records with the dataset's original column headers.
pub fn build_csv<'a, I>(records: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a SalaryRecord>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .into_inner()
        .map_err(|err| DataError::export(err.error().to_string()))
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

/// Hand `bytes` to the user: a browser download on web (returns `None`), a
/// file in the app data directory on native (returns its path).
fn download_bytes(filename: &str, mime: &str, bytes: Vec<u8>) -> Result<Option<String>> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| DataError::export("failed to create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| DataError::export("unable to create download URL"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| DataError::export("document unavailable"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| DataError::export("unable to create anchor"))?
            .dyn_into()
            .map_err(|_| DataError::export("anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or_else(|| DataError::export("missing body"))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = export_dir()?;
        std::fs::create_dir_all(&dir).map_err(|err| DataError::export(err.to_string()))?;
        let path = dir.join(filename);
        std::fs::write(&path, bytes).map_err(|err| DataError::export(err.to_string()))?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn export_dir() -> Result<std::path::PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "Salarios", "Salarios")
        .ok_or_else(|| DataError::export("unable to determine export directory"))?;
    Ok(dirs.data_dir().join("exports"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{parse_csv, COLUMNS};

    fn record(role: &str, salary_usd: f64) -> SalaryRecord {
        SalaryRecord {
            year: 2024,
            seniority: "senior".into(),
            contract: "integral".into(),
            company_size: "media".into(),
            role: role.into(),
            residence: "BR".into(),
            remote: "hibrido".into(),
            salary_usd,
        }
    }

    #[test]
    fn header_uses_dataset_column_names() {
        let bytes = build_csv(&[record("Data Engineer", 90_000.0)]).expect("csv builds");
        let text = String::from_utf8(bytes).expect("utf-8");
        let header = text.lines().next().expect("header line");
        assert_eq!(header, COLUMNS.join(","));
    }

    #[test]
    fn exported_rows_parse_back_unchanged() {
        let records = vec![
            record("Data Engineer", 90_000.0),
            record("Head of Data, LATAM", 210_500.5),
        ];
        let bytes = build_csv(&records).expect("csv builds");
        let reparsed = parse_csv(bytes.as_slice()).expect("export parses");
        assert_eq!(reparsed.records(), records.as_slice());
    }

    #[test]
    fn idle_shows_no_status_line() {
        assert_eq!(ExportStatus::Idle.feedback(), None);
    }

    #[test]
    fn outcomes_map_to_final_states() {
        let saved = ExportStatus::from_outcome(Ok(Some("/tmp/salarios.csv".into())));
        assert!(matches!(saved, ExportStatus::Done(_)));
        let downloaded = ExportStatus::from_outcome(Ok(None));
        assert!(matches!(downloaded, ExportStatus::Done(_)));
        let failed = ExportStatus::from_outcome(Err(DataError::export("disk full")));
        assert!(matches!(failed, ExportStatus::Error(_)));
    }

    #[test]
    fn feedback_classes_follow_the_outcome() {
        let (class, message) = ExportStatus::Done("saved".into())
            .feedback()
            .expect("done is shown");
        assert!(class.ends_with("--success"));
        assert_eq!(message, "✅ saved");

        let (class, message) = ExportStatus::Error("disk full".into())
            .feedback()
            .expect("error is shown");
        assert!(class.ends_with("--error"));
        assert!(message.contains("disk full"));
    }

    #[test]
    fn slug_is_filename_safe() {
        let slug = timestamp_slug();
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }
}
