//! Interface extraction from Kitex-generated `client.go` files.
//!
//! Pulls three things out of one file:
//! - the service name, from the `package` clause
//! - the import lines that reference generated interface code
//! - one [`FunctionPart`] per method of `type Client interface`
//!
//! Each expected marker that is missing becomes a named [`ExtractError`];
//! no partial result is returned.
//!
//! # Examples
//!
//! ```
//! use genclient_codegen::extract_interface;
//!
//! let content = r#"package storage
//!
//! import "example.com/repo/pkg/model/storage/kitex_gen/storage"
//!
//! type Client interface {
//!     GetObject(ctx context.Context, req *storage.GetObjectRequest, opts ...Option) (r *storage.GetObjectResponse, err error)
//! }
//! "#;
//!
//! let extracted = extract_interface(content, "/kitex_gen/").unwrap();
//! assert_eq!(extracted.service.as_str(), "Storage");
//! assert_eq!(extracted.functions[0].zero_response_expr, "&storage.GetObjectResponse{}");
//! assert_eq!(extracted.imports.len(), 1);
//! ```

use crate::signature::{self, SignatureError};
use genclient_core::{FunctionPart, ServiceName};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

// Pre-compiled regex patterns
static PACKAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*package[ \t]+([A-Za-z_][A-Za-z0-9_]*)").expect("valid regex")
});
static QUOTED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"\n]*""#).expect("valid regex"));
static CLIENT_INTERFACE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*type[ \t]+Client[ \t]+interface[ \t]*\{").expect("valid regex")
});

/// Errors that can occur while extracting a client interface.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No `package` clause in the file.
    #[error("package declaration not found")]
    MissingPackage,

    /// No `type Client interface {` declaration in the file.
    #[error("'type Client interface' declaration not found")]
    MissingClientInterface,

    /// The `Client` interface block is never closed.
    #[error("'type Client interface' block is not terminated")]
    UnterminatedInterface,

    /// A declaration inside the interface could not be parsed.
    #[error("malformed method declaration '{declaration}': {source}")]
    MalformedMethod {
        /// Declaration text with comments removed
        declaration: String,
        /// What the signature parser rejected
        #[source]
        source: SignatureError,
    },

    /// The method has no request parameter besides context and options.
    #[error("method '{action}' has no request parameter")]
    MissingRequest {
        /// Method name
        action: String,
    },

    /// The method's results do not have the `(*Response, error)` shape.
    #[error("method '{action}' has an unsupported result list: {reason}")]
    UnsupportedResponse {
        /// Method name
        action: String,
        /// Which part of the result list is unsupported
        reason: &'static str,
    },

    /// The name the generated file would be declared in is not a valid Go
    /// package name.
    #[error("'{name}' is not a valid Go package name")]
    InvalidPackage {
        /// Rejected package name
        name: String,
    },
}

// Go keywords, none of which may name a package.
const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Returns `true` if `name` can appear in a Go `package` clause.
///
/// The name must be an identifier other than `_` and must not be a keyword.
///
/// # Examples
///
/// ```
/// use genclient_codegen::extractor::is_package_name;
///
/// assert!(is_package_name("storage"));
/// assert!(is_package_name("vke_cluster2"));
/// assert!(!is_package_name("vke-cluster"));
/// assert!(!is_package_name("2fa"));
/// assert!(!is_package_name("type"));
/// ```
#[must_use]
pub fn is_package_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
        && name != "_"
        && !GO_KEYWORDS.contains(&name)
}

/// Checks that `name` can be used as the package of a generated file.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidPackage`] if [`is_package_name`] rejects it.
pub fn check_package_name(name: &str) -> Result<(), ExtractError> {
    if is_package_name(name) {
        Ok(())
    } else {
        Err(ExtractError::InvalidPackage {
            name: name.to_string(),
        })
    }
}

/// Everything extracted from one interface file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedInterface {
    /// Title-cased package name
    pub service: ServiceName,
    /// One entry per `Client` method, in declaration order
    pub functions: Vec<FunctionPart>,
    /// Quoted import paths containing the generated-code marker
    pub imports: Vec<String>,
}

/// Extracts the service name, methods, and generated-code imports.
///
/// # Errors
///
/// Returns the first [`ExtractError`] encountered; see the variants for
/// the conditions.
pub fn extract_interface(
    content: &str,
    import_marker: &str,
) -> Result<ExtractedInterface, ExtractError> {
    let service = extract_service_name(content)?;
    let functions = extract_functions(content)?;
    let imports = extract_imports(content, import_marker);

    tracing::debug!(
        "Extracted {} methods and {} imports for service {}",
        functions.len(),
        imports.len(),
        service
    );

    Ok(ExtractedInterface {
        service,
        functions,
        imports,
    })
}

/// Returns the title-cased name from the first `package` clause.
///
/// # Errors
///
/// Returns [`ExtractError::MissingPackage`] if there is no package clause.
///
/// # Examples
///
/// ```
/// use genclient_codegen::extractor::extract_service_name;
///
/// let name = extract_service_name("// header\npackage storageservice\n").unwrap();
/// assert_eq!(name.as_str(), "Storageservice");
/// ```
pub fn extract_service_name(content: &str) -> Result<ServiceName, ExtractError> {
    PACKAGE_REGEX
        .captures(content)
        .and_then(|c| c.get(1))
        .map(|m| ServiceName::from_package(m.as_str()))
        .ok_or(ExtractError::MissingPackage)
}

/// Returns every double-quoted literal containing `marker`, quotes included.
///
/// Literals are kept verbatim so they can be spliced into the generated
/// import block. Repeated literals are reported once, at their first
/// position.
///
/// # Examples
///
/// ```
/// use genclient_codegen::extractor::extract_imports;
///
/// let content = "import (\n\t\"context\"\n\tapi \"x.io/r/kitex_gen/api\"\n)";
/// assert_eq!(extract_imports(content, "/kitex_gen/"), vec!["\"x.io/r/kitex_gen/api\""]);
/// ```
#[must_use]
pub fn extract_imports(content: &str, marker: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    QUOTED_REGEX
        .find_iter(content)
        .map(|m| m.as_str())
        .filter(|literal| literal.contains(marker))
        .filter(|literal| seen.insert(*literal))
        .map(str::to_string)
        .collect()
}

/// Parses every method of the `Client` interface.
///
/// # Errors
///
/// Returns [`ExtractError::MissingClientInterface`] or
/// [`ExtractError::UnterminatedInterface`] if the block cannot be located,
/// and a per-method error for the first declaration that does not have the
/// `Method(ctx, req, opts...) (*Response, error)` shape.
pub fn extract_functions(content: &str) -> Result<Vec<FunctionPart>, ExtractError> {
    let header = CLIENT_INTERFACE_REGEX
        .find(content)
        .ok_or(ExtractError::MissingClientInterface)?;

    let rest = signature::strip_comments(&content[header.end()..]);
    let close =
        signature::find_matching(&rest, '{', '}').ok_or(ExtractError::UnterminatedInterface)?;

    let declarations = signature::split_declarations(&rest[..close]);
    if declarations.is_empty() {
        tracing::warn!("Client interface declares no methods");
    }

    declarations
        .iter()
        .map(|declaration| function_part(declaration))
        .collect()
}

fn function_part(declaration: &str) -> Result<FunctionPart, ExtractError> {
    let method =
        signature::parse_method(declaration).map_err(|source| ExtractError::MalformedMethod {
            declaration: declaration.to_string(),
            source,
        })?;
    let action = method.name;

    let request = method
        .params
        .iter()
        .find(|field| !field.is_context() && !field.is_variadic())
        .ok_or_else(|| ExtractError::MissingRequest {
            action: action.clone(),
        })?;

    let unsupported = |reason| ExtractError::UnsupportedResponse {
        action: action.clone(),
        reason,
    };

    let (last, values) = method
        .results
        .split_last()
        .ok_or_else(|| unsupported("method has no results"))?;
    if last.ty != "error" {
        return Err(unsupported("last result must be error"));
    }
    let response = values
        .first()
        .ok_or_else(|| unsupported("method returns only an error"))?;
    let pointee = response
        .ty
        .strip_prefix('*')
        .map(str::trim)
        .filter(|pointee| !pointee.is_empty())
        .ok_or_else(|| unsupported("response must be a pointer type"))?;

    Ok(FunctionPart {
        request_type: request.ty.clone(),
        response_type: response.ty.clone(),
        zero_response_expr: format!("&{pointee}{{}}"),
        action,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORAGE_CLIENT: &str = "package storage
type Client interface {
GetObject(ctx context.Context, req *storage.GetObjectRequest, opts ...Option) (resp *storage.GetObjectResponse, err error)
}
";

    const KITEX_CLIENT: &str = r#"// Code generated by Kitex v0.5.2. DO NOT EDIT.

package storageservice

import (
	"context"
	client "github.com/cloudwego/kitex/client"
	callopt "github.com/cloudwego/kitex/client/callopt"
	storage "example.com/vke/pkg/model/storage/kitex_gen/storage"
	base "example.com/vke/pkg/model/storage/kitex_gen/base"
)

// Client is designed to provide IDL-compatible methods with call-option parameter for kitex framework.
type Client interface {
	GetObject(ctx context.Context, Req *storage.GetObjectRequest, callOptions ...callopt.Option) (r *storage.GetObjectResponse, err error)
	// PutObject uploads an object.
	PutObject(ctx context.Context, Req *storage.PutObjectRequest, callOptions ...callopt.Option) (r *storage.PutObjectResponse, err error)
	DeleteObject(
		ctx context.Context,
		Req *storage.DeleteObjectRequest,
		callOptions ...callopt.Option,
	) (r *storage.DeleteObjectResponse, err error)
}

// NewClient creates a client for the service defined in IDL.
func NewClient(destService string, opts ...client.Option) (Client, error) {
	var options []client.Option
	options = append(options, client.WithDestService(destService))
	kc, err := client.NewClient(serviceInfo(), options...)
	if err != nil {
		return nil, err
	}
	return &kStorageServiceClient{kClient: newServiceClient(kc)}, nil
}
"#;

    #[test]
    fn test_extract_minimal_client() {
        let extracted = extract_interface(STORAGE_CLIENT, "/kitex_gen/").unwrap();

        assert_eq!(extracted.service.as_str(), "Storage");
        assert_eq!(
            extracted.functions,
            vec![FunctionPart {
                action: "GetObject".to_string(),
                request_type: "*storage.GetObjectRequest".to_string(),
                response_type: "*storage.GetObjectResponse".to_string(),
                zero_response_expr: "&storage.GetObjectResponse{}".to_string(),
            }]
        );
        assert!(extracted.imports.is_empty());
    }

    #[test]
    fn test_extract_kitex_client() {
        let extracted = extract_interface(KITEX_CLIENT, "/kitex_gen/").unwrap();

        assert_eq!(extracted.service.as_str(), "Storageservice");
        let actions: Vec<_> = extracted.functions.iter().map(|f| f.action.as_str()).collect();
        assert_eq!(actions, vec!["GetObject", "PutObject", "DeleteObject"]);
        assert_eq!(
            extracted.functions[2].zero_response_expr,
            "&storage.DeleteObjectResponse{}"
        );
        assert_eq!(
            extracted.imports,
            vec![
                "\"example.com/vke/pkg/model/storage/kitex_gen/storage\"",
                "\"example.com/vke/pkg/model/storage/kitex_gen/base\"",
            ]
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let first = extract_interface(KITEX_CLIENT, "/kitex_gen/").unwrap();
        let second = extract_interface(KITEX_CLIENT, "/kitex_gen/").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_package() {
        let err = extract_interface("type Client interface {\n}\n", "/kitex_gen/").unwrap_err();
        assert!(matches!(err, ExtractError::MissingPackage));
    }

    #[test]
    fn test_commented_package_is_ignored() {
        let err = extract_service_name("// package storage\n").unwrap_err();
        assert!(matches!(err, ExtractError::MissingPackage));
    }

    #[test]
    fn test_missing_client_interface() {
        let err = extract_interface("package storage\n\ntype Other interface {\n}\n", "/kitex_gen/")
            .unwrap_err();
        assert!(matches!(err, ExtractError::MissingClientInterface));
    }

    #[test]
    fn test_unterminated_interface() {
        let content = "package storage\ntype Client interface {\n\tGet(ctx context.Context, r *a.R) (*a.S, error)\n";
        let err = extract_interface(content, "/kitex_gen/").unwrap_err();
        assert!(matches!(err, ExtractError::UnterminatedInterface));
    }

    #[test]
    fn test_empty_interface_yields_no_functions() {
        let extracted = extract_interface("package api\ntype Client interface {}\n", "/kitex_gen/").unwrap();
        assert!(extracted.functions.is_empty());
    }

    #[test]
    fn test_brace_in_parameter_type_does_not_end_block() {
        let content = "package api
type Client interface {
	Do(ctx context.Context, req *api.Req, extra interface{}) (r *api.Resp, err error)
	Undo(ctx context.Context, req *api.Req) (r *api.Resp, err error)
}
";
        let functions = extract_functions(content).unwrap();
        assert_eq!(functions.len(), 2);
        assert_eq!(functions[1].action, "Undo");
    }

    #[test]
    fn test_missing_request() {
        let content = "package api\ntype Client interface {\n\tPing(ctx context.Context, opts ...Option) (r *api.Pong, err error)\n}\n";
        let err = extract_functions(content).unwrap_err();
        assert!(matches!(err, ExtractError::MissingRequest { action } if action == "Ping"));
    }

    #[test]
    fn test_response_must_be_pointer() {
        let content = "package api\ntype Client interface {\n\tGet(ctx context.Context, req *api.Req) (r api.Resp, err error)\n}\n";
        let err = extract_functions(content).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedResponse { .. }));
        assert!(err.to_string().contains("pointer"));
    }

    #[test]
    fn test_last_result_must_be_error() {
        let content = "package api\ntype Client interface {\n\tGet(ctx context.Context, req *api.Req) (r *api.Resp, ok bool)\n}\n";
        let err = extract_functions(content).unwrap_err();
        assert!(err.to_string().contains("last result must be error"));
    }

    #[test]
    fn test_error_only_result() {
        let content = "package api\ntype Client interface {\n\tPut(ctx context.Context, req *api.Req) error\n}\n";
        let err = extract_functions(content).unwrap_err();
        assert!(err.to_string().contains("only an error"));
    }

    #[test]
    fn test_embedded_interface_is_malformed() {
        let content = "package api\ntype Client interface {\n\tio.Closer\n}\n";
        let err = extract_functions(content).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedMethod { .. }));
    }

    #[test]
    fn test_imports_deduplicated() {
        let content = "\"a/kitex_gen/x\"\n\"a/kitex_gen/x\"\n\"a/kitex_gen/y\"";
        assert_eq!(
            extract_imports(content, "/kitex_gen/"),
            vec!["\"a/kitex_gen/x\"", "\"a/kitex_gen/y\""]
        );
    }

    #[test]
    fn test_imports_respect_custom_marker() {
        let content = "import (\n\t\"a/kitex_gen/x\"\n\t\"a/thrift_gen/y\"\n)";
        assert_eq!(extract_imports(content, "/thrift_gen/"), vec!["\"a/thrift_gen/y\""]);
    }

    #[test]
    fn test_package_names() {
        for name in ["storage", "vke_cluster", "_internal", "v2", "types"] {
            assert!(is_package_name(name), "{name}");
        }
        for name in ["", "_", "vke-cluster", "2fa", "my.pkg", "func", "range", "map"] {
            assert!(!is_package_name(name), "{name}");
        }
    }

    #[test]
    fn test_check_package_name_reports_name() {
        let err = check_package_name("vke-cluster").unwrap_err();
        assert!(matches!(&err, ExtractError::InvalidPackage { name } if name == "vke-cluster"));
        assert_eq!(err.to_string(), "'vke-cluster' is not a valid Go package name");
        assert!(check_package_name("cluster").is_ok());
    }
}
