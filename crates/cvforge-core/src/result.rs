//! Result screen contents.

use crate::config::ClientConfig;

/// Suffix appended to the candidate's name for the saved PDF.
pub const DOWNLOAD_SUFFIX: &str = "_CV.pdf";

/// Target and suggested local filename of the download control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub href: String,
    pub file_name: String,
}

/// What the result screen shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultView {
    /// Source of the PDF preview frame
    pub preview_src: Option<String>,
    /// Hidden unless both a name and a URL came back
    pub download: Option<DownloadLink>,
}

/// Build the result screen from the generator's answer.
pub fn populate(
    full_name: Option<&str>,
    download_url: Option<&str>,
    config: &ClientConfig,
) -> ResultView {
    let full_name = full_name.filter(|n| !n.is_empty());
    let download_url = download_url.filter(|u| !u.is_empty());

    let preview_src = download_url.map(|url| match config.resolve(url) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url.to_string(),
    });

    let download = match (full_name, preview_src.as_ref()) {
        (Some(name), Some(href)) => Some(DownloadLink {
            href: href.clone(),
            file_name: download_file_name(name),
        }),
        _ => None,
    };

    ResultView {
        preview_src,
        download,
    }
}

/// `"Jane Doe"` becomes `"Jane_Doe_CV.pdf"`.
pub fn download_file_name(full_name: &str) -> String {
    format!("{}{}", full_name.replace(' ', "_"), DOWNLOAD_SUFFIX)
}
