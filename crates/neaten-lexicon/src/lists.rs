//! Word lists shared by several rule families.

/// Plural-only nouns whose NNS lemma equals the form.
pub const NNS_PTAN_LEMMAS: &[&str] = &[
    "aesthetics", "arrears", "auspices", "barracks", "billiards", "clothes", "confines",
    "contents", "dynamics", "earnings", "eatables", "economics", "electronics", "energetics",
    "environs", "ergonomics", "eyeglasses", "feces", "finances", "fives", "furnishings",
    "genetics", "genitals", "geopolitics", "glasses", "goods", "grounds", "hackles",
    "headquarters", "jeans", "manners", "means", "news", "orthodontics", "panties", "pants",
    "politics", "proceedings", "regards", "remains", "respects", "savings", "scissors",
    "specifics", "statistics", "sunglasses", "supplies", "surroundings", "tenterhooks", "thanks",
    "troops", "trousers", "wares", "whereabouts", "twenties", "thirties", "forties", "fifties",
    "sixties", "seventies", "eighties", "nineties", "mid-nineties",
];

/// Plural-only proper nouns.
pub const NNPS_PTAN_LEMMAS: &[&str] = &[
    "Netherlands", "Analytics", "Olympics", "Commons", "Paralympics", "Vans", "Andes",
    "Philippines", "Maldives", "Politics", "Species",
];

/// Nouns whose singular and plural are both spelled with a final `s`.
pub const SING_AND_PLUR_S_LEMMAS: &[&str] = &["series", "species"];

/// Spelled-out decades, as the last hyphen-separated part of a lemma.
pub const DECADE_WORDS: &[&str] = &[
    "twenties", "thirties", "forties", "fifties", "sixties", "seventies", "eighties", "nineties",
];
