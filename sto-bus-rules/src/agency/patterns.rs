//! STO place-name patterns.
//!
//! Each pattern matches whole words only: the characters around a match are
//! never consumed, so they survive the replacement unchanged. Patterns assume
//! title-cased input but match case-insensitively.

use std::sync::LazyLock;

use regex::Regex;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex")
}

pub static STATION: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)\b(?:station|ston|sta)\b"));
pub const STATION_REPLACEMENT: &str = "";

pub static CEGEP_GABRIELLE_ROY: LazyLock<Regex> = LazyLock::new(|| {
    regex(concat!(
        r"(?i)\b(?:",
        r"c[ée]gep gabrielle-roy",
        r"|cegep gab\.roy",
        r"|cegep gab-roy",
        r"|c[ée]gep groy",
        r"|c[ée]gep g-roy",
        r"|c[ée]gep g\.roy",
        r"|cgp gabrielle-r",
        r"|cgp groy",
        r"|cgp g-roy",
        r"|g-roy",
        r")\b",
    ))
});
pub const CEGEP_GABRIELLE_ROY_REPLACEMENT: &str = "Cgp GRoy";

pub static COLLEGE: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)\bcoll[eèé]ge\b"));
pub const COLLEGE_REPLACEMENT: &str = "Col";

pub static COLLEGE_NOUVELLES_FRONTIERES: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\bcol (?:nf|nouvelles fronti[eè]res)\b"));
pub const COLLEGE_NOUVELLES_FRONTIERES_REPLACEMENT: &str = "Col NF";

pub static COLLEGE_SAINT_JOSEPH: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)\bc stjoseph\b"));
pub const COLLEGE_SAINT_JOSEPH_REPLACEMENT: &str = "Col St-Jo";

pub static COLLEGE_SAINT_ALEXANDRE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\bcol stalex\b"));
pub const COLLEGE_SAINT_ALEXANDRE_REPLACEMENT: &str = "Col St-Alex";

/// `École [Secondaire] X` and `E. X` keep only the school's first word.
pub static ECOLE_X: LazyLock<Regex> = LazyLock::new(|| {
    regex(r"(?i)\b(?:[ée]cole secondaire|[ée]cole sec|[ée]cole|e)(?:\.|\s){1,2}(\w+)")
});
pub const ECOLE_X_REPLACEMENT: &str = "É ${1}";

pub static GRANDE_RIVIERE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\b(?:grande|gr)-rivi[èe]re\b"));
pub const GRANDE_RIVIERE_REPLACEMENT: &str = "Gr-Riv";

pub static GALERIES_AYLMER: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\b(?:galeries aylmer|gal\.aylmer)\b"));
pub const GALERIES_AYLMER_REPLACEMENT: &str = "Gal.Aylmer";

pub static JARDINS_LAVIGNE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\b(?:jardins lavigne|jlavigne)\b"));
pub const JARDINS_LAVIGNE_REPLACEMENT: &str = "JLavigne";

pub static ALLUMETTIERES: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\b(?:des allumetti[èe]res|allumetti[èe]res|allum)\b"));
pub const ALLUMETTIERES_REPLACEMENT: &str = "Allum";

pub static COTES_DES_NEIGES: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\b(?:c[ôo]tes-des-neiges|coteneige)\b"));
pub const COTES_DES_NEIGES_REPLACEMENT: &str = "Côtes-Des-Neiges";

pub static PARC_O_BUS: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\b(?:pob|p-o-b|parc o bus|parc-o-bus)\b"));
pub const PARC_O_BUS_REPLACEMENT: &str = "P-O-B";

pub static PLACE_D_ACCUEIL: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\b(?:place d'accueil|pl\.accueil)\b"));
pub const PLACE_D_ACCUEIL_REPLACEMENT: &str = "Pl.Accueil";

pub static PRE_TUNNEY: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)\bpr[eé] tunney\b"));
pub const PRE_TUNNEY_REPLACEMENT: &str = "Pré-Tunney";

pub static MUSEE_CANADIEN_HISTOIRE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\bmus[eé]e canadien de l'histoire\b"));
pub const MUSEE_CANADIEN_HISTOIRE_REPLACEMENT: &str = "Musée de l'Histoire";

pub static MASSON_ANGERS: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)\bmasson-angers\b"));
pub const MASSON_ANGERS_REPLACEMENT: &str = "M-Angers";

pub static MONT_BLEU: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)\bmont-bleu\b"));
pub const MONT_BLEU_REPLACEMENT: &str = "MontBleu";

/// Arrival / departure markers at either end of a stop name.
///
/// A run of markers is removed in one match, together with the separators
/// between them.
pub static ARRIVAL_DEPARTURE: LazyLock<Regex> = LazyLock::new(|| {
    regex(concat!(
        r"(?i)^(?:(?:arriv[ée]e|d[ée]part)\b[\s/\-]*)+",
        r"|(?:[\s/\-]*\b(?:arr[eê]t d'arriv[ée]e|arriv[ée]e|d[ée]part)",
        r"|[\s/]*-\s*temps d'attente)+$",
    ))
});
pub const ARRIVAL_DEPARTURE_REPLACEMENT: &str = "";

/// `Arrêt de courtoisie X` becomes `X (Arrêt de Courtoisie)`.
pub static COURTESY_STOP: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)^\s*arr[eê]t de courtoisie\b\s*(.*)$"));
pub const COURTESY_STOP_REPLACEMENT: &str = "${1} (Arrêt de Courtoisie)";

/// Long names of school routes.
pub static SCHOOL_ROUTE_LONG_NAME: LazyLock<Regex> = LazyLock::new(|| {
    regex(concat!(
        r"(?i)cgp|c[eé]gep",
        r"|[eé]cole",
        r"|gabrielle-roy|g-roy",
        r"|de l'[iî]le",
        r"|mont-bleu",
        r"|(?:grande|gr)[ \-]rivi[èe]re|esgr",
        r"|stjo|st-joseph",
        r"|st-alexandre",
        r"|(?:nv|nouvelles) fronti[èe]res",
        r"|hormisdas-gamelin",
        // Centre académique de l'Outaouais
        r"|cado",
    ))
});
