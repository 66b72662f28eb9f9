//! Built-in abbreviation rules for street and place names.
//!
//! Pairs of `(phrase, abbreviation)`. Phrases are lower case and matched
//! case-insensitively as whole words; an empty abbreviation drops the phrase.
//! Order is priority: the first pair whose phrase matches wins, so longer
//! phrases sharing a first word are listed before the shorter ones.

/// Built-in `(phrase, abbreviation)` pairs in priority order.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    // Polish
    ("plac", "pl."),
    ("ulica", "ul."),
    ("aleja", "al."),
    ("generała", "gen."),
    ("księdza", "ks."),
    ("księży", "ks."),
    ("księcia", "ks."),
    ("książąt", "ks."),
    ("biskupa", "bp"),
    ("arcybiskupa", "abp"),
    ("doktora", "dr"),
    ("inżyniera", "inż."),
    ("profesora", "prof."),
    ("marszałka", "marsz."),
    ("kapitana", "kpt."),
    ("porucznika", "por."),
    ("podporucznika", "ppor."),
    ("pułkownika", "płk."),
    ("podpułkownika", "ppłk."),
    ("majora", "maj."),
    ("hetmana", "hetm."),
    ("kanclerza", "kanc."),
    ("admirała", "adm."),
    ("komandora", "kmdr."),
    ("imienia", "im."),
    ("numer", "nr"),
    ("kościół", "kościół"),
    ("szkoła podstawowa", "SP"),
    ("liceum ogólnokształcące", "LO"),
    ("liceum", "LO"),
    ("zespół szkół zawodowych", "ZSZ"),
    ("zespół szkół", "ZS"),
    ("pasaż", "pasaż"),
    ("skwer", "skwer"),
    ("ścieżka", "ścieżka"),
    ("trasa", "trasa"),
    ("pod wezwaniem", "pw."),
    ("matki boskiej", "MB"),
    ("najświętszej maryi panny", "NMP"),
    ("najświętszej marii panny", "NMP"),
    ("kanał", "kan."),
    ("góra", "g."),
    ("dworzec", "dworzec"),
    ("stacja", "stacja"),
    ("nad", "n."),
    ("główny", "gł."),
    ("główna", "gł."),
    ("główne", "gł."),
    ("wschodni", "wsch."),
    ("wschodnia", "wsch."),
    ("wschodnie", "wsch."),
    ("zachodni", "zach."),
    ("zachodnia", "zach."),
    ("zachodnie", "zach."),
    ("pierwszy", "I"),
    ("pierwsza", "I"),
    ("pierwsze", "I"),
    ("drugi", "II"),
    ("druga", "II"),
    ("drugie", "II"),
    ("trzeci", "III"),
    ("trzecia", "III"),
    ("trzecie", "III"),
    ("mazowiecki", "maz."),
    ("mazowiecka", "maz."),
    ("mazowieckie", "maz."),
    ("wielkopolski", "wlkp."),
    ("wielkopolska", "wlkp."),
    ("wielkopolskie", "wlkp."),
    ("śląski", "śl."),
    ("śląska", "śl."),
    ("śląskie", "śl."),
    ("pomorski", "pom."),
    ("pomorska", "pom."),
    ("pomorskie", "pom."),
    ("górny", "g."),
    ("górna", "g."),
    ("górne", "g."),
    ("dolny", "d."),
    ("dolna", "d."),
    ("dolne", "d."),
    ("kolonia", "kol."),
    ("miasto stołeczne", "m.st."),
    ("miasta stołecznego", "m.st."),
    ("braci", "braci"),
    ("rodziny", ""),
    ("pracownicze ogródki działkowe", "POD"),
    ("robotnicze ogródki działkowe", "ROD"),
    ("narodowy fundusz zdrowia", "NFZ"),
    ("spółdzielnia mieszkaniowa", "SM"),
    ("osiedle", "os."),
    ("i", "i"),
    ("van", "van"),
    ("komisji edukacji narodowej", "KEN"),
    ("polskiego czerwonego krzyża", "PCK"),
    ("armii krajowej", "AK"),
    ("armii ludowej", "AL"),
    ("podziemnej organizacji wojskowej", "POW"),
    ("tysiąclecia", "1000-lecia"),
    ("trzydziestolecia", "XXX-lecia"),
    ("dziesięciolecia", "X-lecia"),
    ("zakład ubezpieczeń społecznych", "ZUS"),
    ("urząd gminy", "UG"),
    ("urząd miasta", "UM"),
    ("gminny ośrodek sportu i rekreacji", "GOSiR"),
    ("miejski ośrodek sportu i rekreacji", "MOSiR"),
    ("ośrodek sportu i rekreacji", "OSiR"),
    ("wojsk ochrony pogranicza", "WOP"),
    ("jana iii sobieskiego", "Sobieskiego"),
    ("jana pawła", "JP"),
    ("urząd pocztowy", "UP"),
    ("poczta", "UP"),
    ("świętego", "św."),
    ("świętej", "św."),
    ("świętych", "św."),
    ("błogosławionego", "bł."),
    ("błogosławionej", "bł."),
    ("błogosławionych", "bł."),
    ("batalionu", "baonu"),
    ("matki teresy z kalkuty", "Matki Teresy"),

    // English
    ("north", "n"),
    ("east", "e"),
    ("west", "w"),
    ("south", "s"),
    ("northeast", "ne"),
    ("northwest", "nw"),
    ("southeast", "se"),
    ("southwest", "sw"),
    ("street", "st"),
    ("saint", "st"),
    ("state route", "SR"),
    ("state", "st"),
    ("avenue", "ave"),
    ("boulevard", "blvd"),
    ("court", "ct"),
    ("road", "rd"),
    ("alley", "aly"),
    ("crescent", "cres"),
    ("creek", "cr"),
    ("crest", "crst"),
    ("drive", "dr"),
    ("doctor", "dr."),
    ("junior", "jr."),
    ("'s", ""),
    ("highway", "hwy"),
    ("route", "rt"),
    ("circle", "cir"),
    ("expressway", "expy"),
    ("loop", "lp"),
    ("parkway", "pkwy"),
    ("peak", "peak"),
    ("pike", "pike"),
    ("national forest service", "NFS"),
    ("bureau of indian affairs", "BIA"),
    ("bureau of land management", "BLM"),
    ("national", "nat"),
    ("railroad", "RR"),
    ("right of way", "RR"),
    ("building", "bldg"),
    ("county", "co"),
    ("trail", "trail"),
    ("bridge", "brdg"),
    ("crossing", "xing"),
    ("pedestrian", "ped"),
    ("martin luther king", "MLK"),
    ("internal revenue service", "IRS"),
    ("department", "dept"),
    ("district of columbia", "DC"),
    ("first", "1st"),
    ("second", "2nd"),
    ("third", "3rd"),
    ("fourth", "4th"),
    ("fifth", "5th"),
    ("sixth", "6th"),
    ("seventh", "7th"),
    ("eighth", "8th"),
    ("ninth", "9th"),
    ("tenth", "10th"),

    // Spanish
    ("calle", "c."),
    ("avenida", "avda."),
    ("plaza", "pza."),
    ("placita", "placita"),
    ("cuesta", "cuesta"),
    ("paseo", "pº"),
    ("ronda", "rda."),
    ("autovía", "autovía"),
    ("autopista", "autopista"),
    ("víal", "víal"),
    ("glorieta", "gta."),
    ("puerta", "pta."),
    ("carretera", "ctra."),
    ("playa", "playa"),
    ("polideportivo", "polideportivo"),
    ("polígono industrial", "pol. ind."),
    ("urbanización", "urbanización"),
    ("barrio", "barrio"),
    ("parque", "parque"),
    ("ciudad", "ciudad"),
    ("colonia", "colonia"),
    ("del", ""),
    ("de", ""),
    ("el", ""),
    ("la", ""),
    ("los", ""),
    ("doctor", "dr"),
    ("doctora", "dra"),
    ("poeta", "poeta"),
    ("cura", "cura"),
    ("obispo", "obispo"),
    ("licenciado", "ldo."),
    ("instituto de educación secundaria", "IES"),
    ("instituto educación secundaria", "IES"),
    ("colegio de educación infantil y primaria", "CEIP"),
    ("colegio educación infantil y primaria", "CEIP"),
    ("colegio público de educación infantil y primaria", "CEIP"),
    ("colegio público educación infantil y primaria", "CEIP"),
    ("colegio público de educación primaria e infantil", "CEIP"),
    ("colegio público educación primaria e infantil", "CEIP"),
    ("buen retiro", "retiro"),
    ("facultad", "facd."),
    ("departamento", "dpto."),
    ("santa", "sta."),
    ("santo", "sto."),

    // German
    ("straße", "str."),
    ("strasse", "str."),
    ("weg", "weg"),
    ("hauptbahnhof", "hbf"),

    // Russian and Ukrainian
    ("проспе́кт", "пр."),
    ("проспект", "пр."),
    ("проезд", "пр-д"),
    ("улица", "ул."),
    ("вулиця", "вул."),
    ("бульвар", "бул."),
    ("майдан", "майдан"),
    ("площа", "пл."),
    ("площадь", "пл."),

    // Turkish
    ("cadde", "cad."),
    ("caddesi", "cad."),
    ("sokak", "sok."),
    ("sokağı", "sok."),
    ("bulvar", "bul."),
    ("bulvarı", "bul."),
    ("mahalle", "mh."),
    ("mahallesi", "mh."),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(phrase: &str) -> Option<&'static str> {
        ABBREVIATIONS
            .iter()
            .find(|(p, _)| *p == phrase)
            .map(|(_, abbrev)| *abbrev)
    }

    #[test]
    fn phrases_are_lower_case_and_non_empty() {
        for (phrase, _) in ABBREVIATIONS {
            assert!(!phrase.is_empty());
            assert_eq!(*phrase, phrase.to_lowercase(), "{phrase} should be lower case");
        }
    }

    #[test]
    fn military_titles_are_separate_entries() {
        assert_eq!(lookup("hetmana"), Some("hetm."));
        assert_eq!(lookup("kanclerza"), Some("kanc."));
        assert_eq!(lookup("admirała"), Some("adm."));
        assert_eq!(lookup("komandora"), Some("kmdr."));
    }

    #[test]
    fn first_duplicate_wins() {
        // "doctor" appears in both the English and Spanish sections.
        assert_eq!(lookup("doctor"), Some("dr."));
    }

    #[test]
    fn longer_phrases_precede_their_prefixes() {
        let position = |phrase: &str| ABBREVIATIONS.iter().position(|(p, _)| *p == phrase);
        assert!(position("zespół szkół zawodowych") < position("zespół szkół"));
        assert!(position("liceum ogólnokształcące") < position("liceum"));
        assert!(position("state route") < position("state"));
    }
}
