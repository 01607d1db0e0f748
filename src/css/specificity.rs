//! Cascade order: which theme keys a selector resolves through, and in what order.
//!
//! Specificity is a property of the resolution algorithm, not of storage. The
//! theme keeps an unordered `key -> Style` map; [`cascade_keys`] lists the keys
//! to look up from least to most specific:
//!
//! ```text
//! ""                                  universal default
//! type, type/part                     type family
//! .class, type.class, type/part.class class family
//! :state, type:state, type/part:state,
//! type.class:state, type/part.class:state
//! #id, #id:state, #id/part, #id/part:state
//! ```
//!
//! The id family comes last, so ids beat everything else.

use crate::css::selector::Selector;

/// The theme keys `selector` resolves through, least specific first.
///
/// Keys whose components are missing from the selector are skipped, and no key
/// appears twice. The first key is always `""`.
pub fn cascade_keys(selector: &Selector) -> Vec<String> {
    let kind = selector.kind();
    let part = selector.type_part();
    let class = selector.class();
    let id = selector.id();
    let id_part = selector.id_part();
    let state = selector.state();

    let mut keys: Vec<String> = Vec::with_capacity(15);
    let mut push = |key: String| {
        if !keys.contains(&key) {
            keys.push(key);
        }
    };

    push(String::new());

    // type family
    if !kind.is_empty() {
        push(kind.to_owned());
        if !part.is_empty() {
            push(format!("{kind}/{part}"));
        }
    }

    // class family
    if !class.is_empty() {
        push(format!(".{class}"));
        if !kind.is_empty() {
            push(format!("{kind}.{class}"));
            if !part.is_empty() {
                push(format!("{kind}/{part}.{class}"));
            }
        }
    }

    // state family
    if !state.is_empty() {
        push(format!(":{state}"));
        if !kind.is_empty() {
            push(format!("{kind}:{state}"));
            if !part.is_empty() {
                push(format!("{kind}/{part}:{state}"));
            }
            if !class.is_empty() {
                push(format!("{kind}.{class}:{state}"));
                if !part.is_empty() {
                    push(format!("{kind}/{part}.{class}:{state}"));
                }
            }
        }
    }

    // id family
    if !id.is_empty() {
        push(format!("#{id}"));
        if !state.is_empty() {
            push(format!("#{id}:{state}"));
        }
        if !id_part.is_empty() {
            push(format!("#{id}/{id_part}"));
            if !state.is_empty() {
                push(format!("#{id}/{id_part}:{state}"));
            }
        }
    }

    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(selector: &str) -> Vec<String> {
        cascade_keys(&Selector::parse(selector))
    }

    #[test]
    fn empty_selector_has_only_universal_key() {
        assert_eq!(keys(""), vec![""]);
    }

    #[test]
    fn type_only() {
        assert_eq!(keys("button"), vec!["", "button"]);
    }

    #[test]
    fn full_order() {
        assert_eq!(
            keys("list/item.dark#main/title:focus"),
            vec![
                "",
                "list",
                "list/item",
                ".dark",
                "list.dark",
                "list/item.dark",
                ":focus",
                "list:focus",
                "list/item:focus",
                "list.dark:focus",
                "list/item.dark:focus",
                "#main",
                "#main:focus",
                "#main/title",
                "#main/title:focus",
            ]
        );
    }

    #[test]
    fn class_beats_type() {
        let k = keys("button.primary");
        let type_pos = k.iter().position(|x| x == "button").unwrap();
        let class_pos = k.iter().position(|x| x == ".primary").unwrap();
        assert!(class_pos > type_pos);
    }

    #[test]
    fn state_beats_class() {
        let k = keys("button.primary:focus");
        let class_pos = k.iter().position(|x| x == "button.primary").unwrap();
        let state_pos = k.iter().position(|x| x == ":focus").unwrap();
        assert!(state_pos > class_pos);
    }

    #[test]
    fn id_beats_everything() {
        let k = keys("button.primary#ok:focus");
        let id_pos = k.iter().position(|x| x == "#ok").unwrap();
        let richest = k.iter().position(|x| x == "button.primary:focus").unwrap();
        assert!(id_pos > richest);
        assert_eq!(k.last().map(String::as_str), Some("#ok:focus"));
    }

    #[test]
    fn id_without_type() {
        assert_eq!(keys("#ok"), vec!["", "#ok"]);
        assert_eq!(keys("#ok:hover"), vec!["", ":hover", "#ok", "#ok:hover"]);
    }

    #[test]
    fn type_part_feeds_id_family_when_no_id_part() {
        let k = keys("scroll/thumb#side");
        assert!(k.contains(&"scroll/thumb".to_owned()));
        assert!(k.contains(&"#side/thumb".to_owned()));
    }

    #[test]
    fn id_part_stays_out_of_type_family() {
        let k = keys("scroll#side/bar");
        assert!(!k.contains(&"scroll/bar".to_owned()));
        assert!(k.contains(&"#side/bar".to_owned()));
    }

    #[test]
    fn both_parts_each_used_in_own_family() {
        let k = keys("scroll/thumb#side/bar");
        assert!(k.contains(&"scroll/thumb".to_owned()));
        assert!(k.contains(&"#side/bar".to_owned()));
        assert!(!k.contains(&"#side/thumb".to_owned()));
    }

    #[test]
    fn no_duplicates() {
        let k = keys("a/b.c#d/e:f");
        let mut sorted = k.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), k.len());
    }
}
