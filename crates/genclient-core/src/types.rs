//! Domain types shared by the scanner, extractor, and emitter.
//!
//! # Examples
//!
//! ```
//! use genclient_core::{ClientInfo, ServiceName};
//!
//! let info = ClientInfo::new("storage", "/repo/pkg/model/storage/client.go");
//! assert_eq!(info.group, "storage");
//!
//! let service = ServiceName::from_package("storageservice");
//! assert_eq!(service.as_str(), "Storageservice");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One discovered interface file and the group it belongs to.
///
/// The group is the first path segment under the scan root, and names
/// the output directory the generated client lands in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Logical service family (first directory under the scan root)
    pub group: String,
    /// Full path of the interface file
    pub path: PathBuf,
}

impl ClientInfo {
    /// Creates a new client info record.
    #[must_use]
    pub fn new(group: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            group: group.into(),
            path: path.into(),
        }
    }
}

/// One method signature extracted from a `Client` interface.
///
/// # Examples
///
/// ```
/// use genclient_core::FunctionPart;
///
/// let part = FunctionPart {
///     action: "GetObject".to_string(),
///     request_type: "*storage.GetObjectRequest".to_string(),
///     response_type: "*storage.GetObjectResponse".to_string(),
///     zero_response_expr: "&storage.GetObjectResponse{}".to_string(),
/// };
///
/// assert_eq!(part.action, "GetObject");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionPart {
    /// Method name, used as both the wrapper name and the action string
    pub action: String,
    /// Request parameter type as written in source
    pub request_type: String,
    /// First result type as written in source
    pub response_type: String,
    /// Composite literal building an empty response, e.g. `&pkg.Resp{}`
    pub zero_response_expr: String,
}

/// Service name derived from an interface file's package clause.
///
/// Each word of the package name is capitalized, so `storage` becomes
/// `Storage`. The name is used as the generated struct name, and its
/// lowercase form as part of the output filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceName(String);

impl ServiceName {
    /// Builds a service name by title-casing a package name.
    ///
    /// A letter is upper-cased when it starts the string or follows a
    /// character that is neither alphanumeric nor `_`.
    ///
    /// # Examples
    ///
    /// ```
    /// use genclient_core::ServiceName;
    ///
    /// assert_eq!(ServiceName::from_package("storage").as_str(), "Storage");
    /// assert_eq!(ServiceName::from_package("vke cluster").as_str(), "Vke Cluster");
    /// assert_eq!(ServiceName::from_package("vke_cluster").as_str(), "Vke_cluster");
    /// ```
    #[must_use]
    pub fn from_package(package: &str) -> Self {
        let mut out = String::with_capacity(package.len());
        let mut at_word_start = true;
        for ch in package.chars() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            at_word_start = !(ch.is_alphanumeric() || ch == '_');
        }
        Self(out)
    }

    /// Returns the service name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the lowercase form used in output filenames.
    ///
    /// # Examples
    ///
    /// ```
    /// use genclient_core::ServiceName;
    ///
    /// let name = ServiceName::from_package("storage");
    /// assert_eq!(name.to_file_stem(), "storage");
    /// ```
    #[must_use]
    pub fn to_file_stem(&self) -> String {
        self.0.to_lowercase()
    }

    /// Consumes the `ServiceName` and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_name_capitalizes_first_letter() {
        assert_eq!(ServiceName::from_package("storage").as_str(), "Storage");
        assert_eq!(
            ServiceName::from_package("storageservice").as_str(),
            "Storageservice"
        );
    }

    #[test]
    fn test_service_name_keeps_existing_case() {
        assert_eq!(ServiceName::from_package("vkeCluster").as_str(), "VkeCluster");
    }

    #[test]
    fn test_service_name_title_cases_each_word() {
        assert_eq!(ServiceName::from_package("a-b c").as_str(), "A-B C");
    }

    #[test]
    fn test_service_name_digits_do_not_split_words() {
        assert_eq!(ServiceName::from_package("v2api").as_str(), "V2api");
    }

    #[test]
    fn test_service_name_empty() {
        assert_eq!(ServiceName::from_package("").as_str(), "");
    }

    #[test]
    fn test_file_stem_is_lowercase() {
        let name = ServiceName::from_package("vkeCluster");
        assert_eq!(name.to_file_stem(), "vkecluster");
    }

    #[test]
    fn test_client_info_serializes() {
        let info = ClientInfo::new("storage", "/repo/pkg/model/storage/client.go");
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"group\":\"storage\""));
        assert!(json.contains("client.go"));
    }
}
