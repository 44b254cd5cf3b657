use std::collections::HashSet;

// class name merging
//
// components take an optional class list from their caller and merge it with
// their own defaults.  utility classes in the same group fight over the same css
// property, so only the last one of each group survives; everything we don't
// recognize passes through untouched
#[derive(Clone, Debug, PartialEq)]
pub enum ClassValue {
    Classes(String),
    Skip,
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        ClassValue::Classes(value.to_owned())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        ClassValue::Classes(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        ClassValue::Classes(value.clone())
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Skip, Into::into)
    }
}

// (class, condition) pairs are included only when the condition holds
impl<T: Into<ClassValue>> From<(T, bool)> for ClassValue {
    fn from((value, include): (T, bool)) -> Self {
        if include { value.into() } else { ClassValue::Skip }
    }
}

#[macro_export]
macro_rules! cn {
    ($($value:expr),* $(,)?) => {
        $crate::common::classes::merge_classes([
            $($crate::common::classes::ClassValue::from($value)),*
        ])
    };
}

pub fn merge_classes<I>(inputs: I) -> String
where
    I: IntoIterator<Item = ClassValue>,
{
    let classes = inputs
        .into_iter()
        .filter_map(|value| match value {
            ClassValue::Classes(s) => Some(s),
            ClassValue::Skip => None,
        })
        .collect::<Vec<_>>();

    let tokens = classes
        .iter()
        .flat_map(|s| s.split_whitespace())
        .collect::<Vec<_>>();

    // walk backwards so that the first class we see in each group is the one that wins
    let mut taken = HashSet::new();
    let mut kept = Vec::with_capacity(tokens.len());

    for token in tokens.into_iter().rev() {
        let (variants, utility) = split_variants(token);

        if let Some(group) = class_group(utility) {
            let key = format!("{variants}{group}");

            if taken.contains(&key) {
                continue;
            }

            for overridden in overrides(group) {
                taken.insert(format!("{variants}{overridden}"));
            }
            taken.insert(key);
        }

        kept.push(token);
    }

    kept.reverse();
    kept.join(" ")
}

// "md:hover:px-4" -> ("md:hover:", "px-4")
fn split_variants(token: &str) -> (&str, &str) {
    match token.rfind(':') {
        Some(idx) => (&token[..=idx], &token[idx + 1..]),
        None => ("", token),
    }
}

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "contents",
    "table",
    "hidden",
];

const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const FONT_FAMILIES: &[&str] = &["sans", "serif", "mono"];

const BORDER_WIDTHS: &[&str] = &["0", "2", "4", "8"];

// prefixes are checked longest first, so "px-" is found before "p-"
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("space-x-", "space-x"),
    ("space-y-", "space-y"),
    ("min-w-", "min-w"),
    ("min-h-", "min-h"),
    ("max-w-", "max-w"),
    ("max-h-", "max-h"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("p-", "p"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("m-", "m"),
    ("w-", "w"),
    ("h-", "h"),
    ("z-", "z"),
    ("opacity-", "opacity"),
    ("items-", "items"),
    ("justify-", "justify"),
    ("tracking-", "tracking"),
    ("leading-", "leading"),
    ("overflow-", "overflow"),
    ("duration-", "duration"),
    ("bg-", "bg-color"),
];

fn class_group(utility: &str) -> Option<&'static str> {
    // negative values share a group with the positive ones
    let utility = utility.strip_prefix('-').unwrap_or(utility);

    if DISPLAY.contains(&utility) {
        return Some("display");
    }

    if POSITION.contains(&utility) {
        return Some("position");
    }

    match utility {
        "flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse" => {
            return Some("flex-direction");
        }
        "flex-wrap" | "flex-wrap-reverse" | "flex-nowrap" => return Some("flex-wrap"),
        "rounded" => return Some("rounded"),
        "shadow" => return Some("shadow"),
        "border" => return Some("border-width"),
        _ => (),
    }

    if let Some(value) = utility.strip_prefix("text-") {
        return Some(if TEXT_SIZES.contains(&value) {
            "text-size"
        } else if TEXT_ALIGN.contains(&value) {
            "text-align"
        } else {
            "text-color"
        });
    }

    if let Some(value) = utility.strip_prefix("font-") {
        if FONT_WEIGHTS.contains(&value) {
            return Some("font-weight");
        }
        if FONT_FAMILIES.contains(&value) {
            return Some("font-family");
        }
        return None;
    }

    if let Some(value) = utility.strip_prefix("border-") {
        return Some(if BORDER_WIDTHS.contains(&value) {
            "border-width"
        } else {
            "border-color"
        });
    }

    // only the all-corner radius; rounded-t-lg and friends are left alone
    if let Some(value) = utility.strip_prefix("rounded-") {
        return (!value.contains('-') && !["t", "r", "b", "l"].contains(&value))
            .then_some("rounded");
    }

    if utility.starts_with("shadow-") {
        return Some("shadow");
    }

    PREFIX_GROUPS
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, group)| *group)
}

// a shorthand class also takes out the longhands written before it, i.e.
// "px-2 p-4" is just "p-4", while "p-4 px-2" keeps both
fn overrides(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn joins_plain_classes() {
        assert_eq!(cn!("card", "h-full overflow-hidden"), "card h-full overflow-hidden");
    }

    #[test]
    fn drops_skipped_values() {
        let none: Option<&str> = None;

        assert_eq!(cn!("btn", none, ("active", false), ("ghost", true)), "btn ghost");
        assert_eq!(cn!(Some("space-y-6"), ""), "space-y-6");
    }

    #[test]
    fn later_conflicting_class_wins() {
        assert_eq!(cn!("px-2 py-1", "px-4"), "py-1 px-4");
        assert_eq!(cn!("text-sm text-red-500", "text-lg"), "text-red-500 text-lg");
        assert_eq!(cn!("font-bold", "font-medium"), "font-medium");
        assert_eq!(cn!("flex", "hidden"), "hidden");
        assert_eq!(cn!("rounded-md", "rounded-xl"), "rounded-xl");
    }

    #[test]
    fn shorthand_overrides_earlier_longhand_only() {
        assert_eq!(cn!("px-2 py-1", "p-3"), "p-3");
        assert_eq!(cn!("p-3", "px-2"), "p-3 px-2");
        assert_eq!(cn!("mt-2", "m-0"), "m-0");
    }

    #[test]
    fn variants_are_separate_groups() {
        assert_eq!(
            cn!("text-sm md:text-lg", "hover:text-primary text-base"),
            "md:text-lg hover:text-primary text-base"
        );
        assert_eq!(cn!("md:flex-row", "md:flex-col"), "md:flex-col");
    }

    #[test]
    fn unknown_classes_pass_through() {
        assert_eq!(
            cn!("section hero-title", "section"),
            "section hero-title section"
        );
    }

    #[test]
    fn negative_values_share_a_group() {
        assert_eq!(cn!("-mt-2", "mt-4"), "mt-4");
    }
}
