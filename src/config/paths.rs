//! Canonical IIAB paths.
//!
//! Single source of truth for the default locations; `config` may
//! override any of them.
//!
//! | Path | Owner | Purpose |
//! |------|-------|---------|
//! | `/etc/iiab/*catalog.json` | IIAB admin console | Download catalogs |
//! | `MENU_DEFS_DIR` | js-menu | One JSON file per menu item |

// ============================================================================
// Catalogs
// ============================================================================

/// Kiwix ZIM catalog
pub const KIWIX_CATALOG: &str = "/etc/iiab/kiwix_catalog.json";

/// OER2Go module catalog
pub const OER2GO_CATALOG: &str = "/etc/iiab/oer2go_catalog.json";

/// Map tile catalog
pub const MAP_CATALOG: &str = "/etc/iiab/map-catalog.json";

// ============================================================================
// Menu registry
// ============================================================================

/// Menu definitions directory
pub const MENU_DEFS_DIR: &str = "/library/www/html/js-menu/menu-files/menu-defs";

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_catalogs_live_in_etc_iiab() {
        for catalog in [KIWIX_CATALOG, OER2GO_CATALOG, MAP_CATALOG] {
            let path = Path::new(catalog);
            assert!(path.is_absolute());
            assert_eq!(path.parent(), Some(Path::new("/etc/iiab")));
            assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
        }
    }

    #[test]
    fn test_menu_defs_dir_is_absolute() {
        assert!(Path::new(MENU_DEFS_DIR).is_absolute());
        assert!(MENU_DEFS_DIR.ends_with("menu-defs"));
    }
}
