//! UTF-8 encoding test page.
//!
//! Diagnostic page that renders names the clinic actually sees (accents,
//! eñes, multi-word titles) together with the identity values derived from
//! them. If any hop mangles the encoding - SSR, headers, fonts - it shows up
//! here first, and a mangled name would also change its seed and initials.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::avatar::{identity_seed, initials};

/// Names with the character shapes that have broken before.
const SAMPLE_NAMES: &[&str] = &[
    "María González",
    "Dr. Carlos Rodríguez",
    "Ana López",
    "Sofía Ramírez Ñandú",
    "Jürgen Müller",
    "François Lefèvre",
];

/// UTF-8 display test page.
#[component]
pub fn Encoding() -> Element {
    let rows: Vec<(&str, String, u32)> = SAMPLE_NAMES
        .iter()
        .map(|name| (*name, initials(name), identity_seed(name)))
        .collect();

    rsx! {
        Layout {
            title: "Encoding Test".to_string(),
            nav_active: "encoding".to_string(),
            show_encoding: true,

            h1 { "Encoding Test" }
            p {
                "Accented and non-ASCII strings as the backend sends them. "
                "Every row must render without replacement characters."
            }

            table {
                thead {
                    tr {
                        th { "Display name" }
                        th { "Initials" }
                        th { "Identity seed" }
                    }
                }
                tbody {
                    for (name, badge, seed) in rows {
                        tr {
                            td { "{name}" }
                            td { "{badge}" }
                            td { "{seed}" }
                        }
                    }
                }
            }

            article {
                header { "Mixed sample" }
                p { "Señor Ñoño pesó 4½ kg — ¡qué pequeño! 🐾🐕🐈" }
                p { "Прогулка • 散歩 • περίπατος" }
            }
        }
    }
}
