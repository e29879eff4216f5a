//! ISO 639 language code conversion
//!
//! makemkvcon reports three letter ISO 639-2 codes, either the bibliographic
//! (`ger`) or terminological (`deu`) form. Codes without an ISO 639-1
//! equivalent are reported as given.

use isolang::Language;

/// ISO 639-2/B codes that differ from their terminological form
const BIBLIOGRAPHIC: &[(&str, &str)] = &[
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("dut", "nld"),
    ("fre", "fra"),
    ("geo", "kat"),
    ("ger", "deu"),
    ("gre", "ell"),
    ("ice", "isl"),
    ("mac", "mkd"),
    ("mao", "mri"),
    ("may", "msa"),
    ("per", "fas"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("tib", "bod"),
    ("wel", "cym"),
];

fn language(code: &str) -> Option<Language> {
    if code.len() != 3 {
        return None;
    }
    let code = code.to_ascii_lowercase();
    let terminological = BIBLIOGRAPHIC
        .iter()
        .find(|(b, _)| *b == code)
        .map_or(code.as_str(), |(_, t)| *t);
    Language::from_639_3(terminological)
}

/// Two letter code for a three letter ISO 639-2 code
pub fn to_iso639_1(code: &str) -> Option<&'static str> {
    language(code).and_then(|lang| lang.to_639_1())
}

/// Three letter terminological code for a two letter code
pub fn to_iso639_2(code: &str) -> Option<&'static str> {
    Language::from_639_1(&code.to_ascii_lowercase()).map(|lang| lang.to_639_3())
}
