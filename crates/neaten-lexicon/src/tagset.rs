//! Tag inventory: extended Penn Treebank XPOS tags and their UPOS pairings.

/// Penn Treebank tags plus the web-text extensions (HYPH, ADD, AFX, NFP, GW).
pub const XPOS_TAGS: &[&str] = &[
    "CC", "CD", "DT", "EX", "FW", "IN", "IN/that", "JJ", "JJR", "JJS", "LS", "MD", "NN", "NNS",
    "NNP", "NNPS", "PDT", "POS", "PRP", "PRP$", "RB", "RBR", "RBS", "RP", "SENT", "SYM", "TO",
    "UH", "VB", "VBD", "VBG", "VBN", "VBP", "VBZ", "WDT", "WP", "WP$", "WRB", ".", "``", "''",
    "-LRB-", "-RRB-", "-LSB-", "-RSB-", "-LCB-", "-RCB-", ",", ":", "$", "HYPH", "ADD", "AFX",
    "NFP", "GW",
];

/// XPOS tags known to co-occur with each UPOS tag.
const UPOS_XPOS: &[(&str, &[&str])] = &[
    ("ADJ", &["JJ", "JJR", "JJS", "NN", "NNP", "FW", "AFX"]),
    ("ADP", &["RP", "IN", "NNP", "CC"]),
    ("ADV", &["RB", "RBR", "RBS", "WRB", "CC", "NN", "NNP", "FW", "AFX"]),
    ("AUX", &["MD", "VB", "VBD", "VBG", "VBN", "VBP", "VBZ"]),
    ("CCONJ", &["CC"]),
    ("DET", &["DT", "PDT", "WDT", "NNP"]),
    ("INTJ", &["UH", "JJ", "NN", "FW"]),
    ("NOUN", &["NN", "NNS"]),
    ("NUM", &["CD", "LS", "NNP"]),
    ("PART", &["POS", "RB", "TO"]),
    ("PRON", &["PRP", "PRP$", "WP", "WP$", "DT", "WDT", "EX", "NN"]),
    ("PROPN", &["ADD", "NNP", "NNPS"]),
    (
        "PUNCT",
        &[
            ".", ",", ":", "``", "''", "-LCB-", "-RCB-", "-LRB-", "-RRB-", "-LSB-", "-RSB-", "NFP",
            "HYPH", "SYM",
        ],
    ),
    ("SCONJ", &["IN"]),
    ("SYM", &["$", ",", "SYM", "NFP", "NN", "NNS", "IN", "HYPH"]),
    ("VERB", &["VB", "VBD", "VBG", "VBN", "VBP", "VBZ", "NNP"]),
    (
        "X",
        &[
            "ADD", "GW", "FW", "AFX", "NN", "NNP", "VB", "RB", "JJ", "WP", "LS", "IN", "PRP", "WRB",
            "MD", "-LRB-", "-RRB-",
        ],
    ),
];

pub fn is_xpos(tag: &str) -> bool {
    XPOS_TAGS.contains(&tag)
}

/// XPOS tags compatible with `upos`, or `None` for an unknown UPOS.
pub fn compatible_xpos(upos: &str) -> Option<&'static [&'static str]> {
    UPOS_XPOS
        .iter()
        .find(|(tag, _)| *tag == upos)
        .map(|(_, xpos)| *xpos)
}
