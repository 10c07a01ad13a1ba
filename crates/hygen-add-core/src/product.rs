//! Product configuration trait for CLI binaries
//!
//! This trait names the conventions a template-package installer follows:
//! how packages are named on disk, which directory holds their templates,
//! and which environment variables override the default locations.

/// Configuration trait for template-package products
///
/// Each product (e.g. `hygen-add`) implements this trait to define:
/// - Product identity
/// - Package naming convention
/// - Template directory conventions
/// - Environment variable overrides
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name
    fn name(&self) -> &'static str;

    /// Prefix prepended to an identifier to form its module name (e.g. `hygen-`)
    fn module_prefix(&self) -> &'static str;

    /// Directory name that holds templates inside a package
    fn templates_dir(&self) -> &'static str {
        "_templates"
    }

    /// Environment variable overriding the global module root
    fn global_root_env(&self) -> &'static str;

    /// Global module root used when the override is unset
    fn default_global_root(&self) -> &'static str;

    /// Environment variable overriding the destination templates directory
    fn dest_dir_env(&self) -> &'static str;

    /// Name of the local module directory next to the installation
    fn local_modules_dir(&self) -> &'static str {
        "node_modules"
    }
}
