// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relative link prefixes.
//!
//! Index URLs are site-root relative (`subjects/biology/block-2/03-osmosis.html`)
//! but the site is served as plain files, so links must climb out of the
//! current page's directory first. The site has four page depths:
//!
//! | Current page                          | Prefix      |
//! |---------------------------------------|-------------|
//! | `/subjects/<subject>/block-N/page`    | `../../../` |
//! | `/subjects/<subject>/page`            | `../../`    |
//! | `/tests/<subject>/block-N/page`       | `../../../` |
//! | `/tests/page`                         | `../`       |
//! | anything else                         | (empty)     |

/// Prefix to prepend to index URLs when linking from `pathname`.
pub fn path_prefix(pathname: &str) -> &'static str {
    let in_block = pathname.contains("/block-");
    if pathname.contains("/subjects/") {
        if in_block {
            "../../../"
        } else {
            "../../"
        }
    } else if pathname.contains("/tests/") {
        if in_block {
            "../../../"
        } else {
            "../"
        }
    } else {
        ""
    }
}
