//! Languages whose line comments start with `//`.
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LineCommentLanguage {
    pub name: String,
    pub file_extensions: Vec<String>,
}

pub fn lang(name: &str, exts: Vec<&str>) -> LineCommentLanguage {
    LineCommentLanguage {
        name: name.into(),
        file_extensions: exts.into_iter().map(|ext| ext.into()).collect(),
    }
}

pub fn all_line_comment_langs() -> Vec<LineCommentLanguage> {
    vec![
        lang("Actionscript", vec!["as"]),
        lang("Apex class", vec!["cls"]),
        lang("Apex trigger", vec!["trigger"]),
        lang(
            "C, C++, C#",
            vec![
                "h", "c", "cpp", "cs", "cxx", "cc", "hpp", "hxx", "hh", "ino",
            ],
        ),
        lang("D", vec!["d"]),
        lang("Dart", vec!["dart"]),
        lang("Delphi, Object Pascal", vec!["p", "pp", "pas"]),
        lang("Go", vec!["go"]),
        lang("Groovy", vec!["groovy"]),
        lang("Haxe", vec!["hx"]),
        lang("Java", vec!["java"]),
        lang("JavaScript", vec!["js", "mjs", "cjs", "es6", "es", "jsx"]),
        lang("Kotlin", vec!["kt", "kts"]),
        lang("Less", vec!["less"]),
        lang("Mel", vec!["mel"]),
        lang("Objective-C", vec!["h", "m", "mm"]),
        lang(
            "PHP",
            vec![
                "php", "phtml", "php3", "php4", "php5", "php7", "phps", "php-s",
            ],
        ),
        lang("Reasonml", vec!["re"]),
        lang("Rust", vec!["rs", "rc"]),
        lang("Sbt", vec!["sbt"]),
        lang("Scala", vec!["sc", "scala"]),
        lang("Scss", vec!["scss"]),
        lang("Stylus", vec!["styl"]),
        lang("Swift", vec!["swift"]),
        lang("Typescript", vec!["ts", "tsx", "mts", "cts"]),
        lang("Vala", vec!["vala", "vapi"]),
        lang("Vue component", vec!["vue"]),
    ]
}

/// Every known extension, sorted and without duplicates.
pub fn default_extensions() -> Vec<String> {
    let langs = all_line_comment_langs();
    log::debug!(
        "default extensions cover {}",
        langs
            .iter()
            .map(|language| language.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    langs
        .into_iter()
        .flat_map(|language| language.file_extensions)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The languages that use the given file extension, ignoring case.
pub fn languages_for(ext: &str) -> Vec<String> {
    all_line_comment_langs()
        .into_iter()
        .filter(|language| {
            language
                .file_extensions
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .map(|language| language.name)
        .collect()
}
