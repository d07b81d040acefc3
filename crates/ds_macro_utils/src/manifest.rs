use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locates an accessible [`syn::Path`] for a `ds_*` crate as seen from the
/// Cargo.toml of the crate invoking the macro.
///
/// # Example
///
/// ```rust
/// # use ds_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("ds_describe"));
/// ```
///
/// Reading the manifest is not cheap, call it once per macro expansion.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the name begins with `ds_` and the caller depends on one of the
///    facades `descry`, `ds_core` or `ds` (checked in this order), return
///    `::facade::short_name`, e.g. `ds_describe` -> `::ds_core::describe`.
/// 3. Repeat steps 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// A crate that needs to name itself from generated code should add
/// `extern crate self as crate_name;` to its root.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADES: [&str; 3] = ["descry", "ds_core", "ds"];
const PREFIX: &str = "ds_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn get_manifest_modified_time(path: &Path) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    fn absolute(segments: &[&str]) -> syn::Path {
        let path = segments.iter().fold(String::new(), |mut acc, segment| {
            acc.push_str("::");
            acc.push_str(segment);
            acc
        });
        syn::parse_str(&path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute(&[name]));
        }

        let module = name.strip_prefix(PREFIX)?;
        FACADES
            .into_iter()
            .find(|facade| deps.contains_key(facade))
            .map(|facade| Self::absolute(&[facade, module]))
    }

    /// Returns a [`syn::Path`] for the package named `name`, resolved from the
    /// caller's Cargo.toml. See the type documentation for the rules.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .find_map(|key| match self.manifest.get(key) {
                Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                _ => None,
            })
            .unwrap_or_else(|| Self::absolute(&[name]))
    }

    /// Runs `func` with the cached [`Manifest`] of the caller's Cargo.toml.
    ///
    /// The cache is refreshed when the file's modified time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use toml_edit::Document;

    use super::Manifest;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(Box::from(text)).unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        }
    }

    fn path_string(path: &syn::Path) -> String {
        path.segments
            .iter()
            .map(|s| s.ident.to_string())
            .collect::<Vec<_>>()
            .join("::")
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nds_describe = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("ds_describe")), "ds_describe");
    }

    #[test]
    fn facade_dependency() {
        let m = manifest("[dependencies]\nds_core = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("ds_describe")), "ds_core::describe");
    }

    #[test]
    fn dev_dependency_and_fallback() {
        let m = manifest("[dev-dependencies]\ndescry = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("ds_utils")), "descry::utils");
        assert_eq!(path_string(&m.get_crate_path("serde")), "serde");
    }
}
