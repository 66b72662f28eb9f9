//! Built-in given names.
//!
//! Polish given names in the genitive case (which for many names matches the
//! nominative). Streets named after a person usually carry the full name;
//! the shortener reduces a recognized given name to its initial.

/// Built-in given names in priority order.
pub const GIVEN_NAMES: &[&str] = &[
    "Abrahama", "Achacego", "Adama", "Adelajdy", "Adolfa", "Adriana", "Ady", "Agaty", "Agnieszki",
    "Ahmeda", "Alberta", "Albina", "Aleksandra", "Aleksandry", "Alfreda", "Alicji", "Alojzego",
    "Amadeusza", "Ambrożego", "Anastazego", "Anatola", "Andrzeja", "Anety", "Angeli", "Anieli",
    "Anity", "Anny", "Antoniego", "Antoniny", "Apoloniusza", "Arkadiusza", "Arkadego", "Artura",
    "Azalii", "Balbiny", "Baltazara", "Barbary", "Barnaby", "Bartłomieja", "Bartosza", "Bazylego",
    "Beaty", "Beniamina", "Błażeja", "Bogdana", "Bogumiła", "Bogumiły", "Bolesława", "Bonifacego",
    "Borysława", "Bożeny", "Bruno", "Brunona", "Brygidy", "Cecylii", "Celiny", "Cezarego",
    "Cypriana", "Cyryla", "Czesława", "Czesławy", "Dagmary", "Damiana", "Daniela", "Danuty",
    "Darii", "Dariusza", "Dawida", "Dezyderego", "Dionizego", "Dominika", "Dominiki", "Donalda",
    "Doroty", "Edmunda", "Edwarda", "Edwina", "Edyty", "Elizy", "Elżbiety", "Emila", "Emiliana",
    "Emiliusza", "Emilii", "Eryka", "Eugeniusza", "Eustachego", "Euzebii", "Eweliny", "Ewy",
    "Fabiana", "Faustyna", "Feliksa", "Felicjana", "Ferreriusza", "Filipa", "Floriana",
    "Franciszka", "Fryderyka", "Gabriela", "Gabrieli", "Gawła", "Genowefy", "Geralda", "Gerwazego",
    "Grażyny", "Grety", "Grzegorza", "Gustawa", "Haliny", "Hanny", "Hektora", "Heleny", "Helmuta",
    "Henryka", "Herakliusza", "Herberta", "Hermenegildy", "Hieronima", "Hilarego", "Hipolita",
    "Honoraty", "Huberta", "Hugo", "Hugona", "Icchaka", "Ignacego", "Igora", "Ildefonsa", "Indiry",
    "Ireneusza", "Ireny", "Iwo", "Iwony", "Izabeli", "Izydora", "Jacka", "Jadwigi", "Jagny",
    "Jagody", "Jakuba", "Jana", "Janiny", "Janka", "Janusza", "Jarosława", "Jaśminy",
    "Jawaharlala", "Jeremiasza", "Jeremiego", "Jerzego", "Jędrzeja", "Joahima", "Johana", "Johna",
    "Jonasza", "Jolanty", "Józefa", "Józefiny", "Juliana", "Julii", "Juliusza", "Juranda",
    "Jurija", "Justyny", "Kacpra", "Kajetana", "Kaji", "Kamila", "Kalasantego", "Karola",
    "Karoliny", "Katarzyny", "Kazimiery", "Kazimierza", "Kingi", "Klaudii", "Klaudiusza",
    "Kleofasa", "Konrada", "Konstantego", "Kornela", "Krystiana", "Krystyny", "Krzysztofa",
    "Ksawerego", "Lajosa", "Lecha", "Lejba", "Leny", "Leokadii", "Leona", "Leonida", "Leopolda",
    "Leszka", "Lidii", "Lucjana", "Lucyny", "Ludwika", "Ludwiki", "Ludomiły", "Ludomiła",
    "Ludomira", "Łazarza", "Łucji", "Łukasza", "Macieja", "Magdaleny", "Mahatmy", "Maji",
    "Maksymiliana", "Malwiny", "Małgorzaty", "Marcelego", "Marceliny", "Marcina", "Marii",
    "Marianny", "Marioli", "Mariusza", "Marleny", "Marka", "Marty", "Martyny", "Maryli", "Marzeny",
    "Mateusza", "Matyldy", "Maurycego", "Melanii", "Melchiora", "Michała", "Michaliny",
    "Mieczysława", "Mieczysławy", "Mikołaja", "Mileny", "Miłosza", "Mirona", "Mirosława",
    "Mirosławy", "Moniki", "Mordechaja", "Natalii", "Niccolo", "Nikodema", "Niny", "Norberta",
    "Ofelii", "Olafa", "Oleńki", "Olgi", "Olgierda", "Oliwii", "Onufrego", "Oskara", "Otylii",
    "Paavo", "Pabla", "Pablo", "Pafnucego", "Pankracego", "Patrycji", "Patryka", "Pauliny",
    "Pawła", "Piotra", "Poli", "Porfirego", "Prota", "Protazego", "Przemysława", "Rabindrannatha",
    "Radosława", "Rafała", "Rajmunda", "Remigiusza", "Renaty", "Roberta", "Rolanda", "Romana",
    "Romualda", "Rosy", "Rudolfa", "Ryszarda", "Sabiny", "Samuela", "Sandora", "Sandry", "Sary",
    "Saszy", "Sebastiana", "Sergiusza", "Seweryna", "Sławomira", "Sławomiry", "Sobiesława",
    "Stanisława", "Stefana", "Stefanii", "Sue", "Sylwestra", "Sylwii", "Szczepana", "Szymona",
    "Tadeusza", "Tamary", "Teodora", "Teofila", "Teresy", "Thomasa", "Tobiasza", "Tomasza",
    "Tymona", "Tymoteusza", "Tytusa", "Urszuli", "Vincenta", "Wacława", "Waldemara", "Walentego",
    "Walentyny", "Walerego", "Waleriana", "Walerii", "Wandy", "Wawrzyńca", "Wenantego", "Weroniki",
    "Wespazjana", "Wiesława", "Wiesławy", "Wiktora", "Wiktorii", "Wilhelma", "Wincentego",
    "Wioletty", "Wisławy", "Wita", "Witolda", "Wlastimila", "Władysława", "Włodzimierza",
    "Wojciecha", "Wolfganga", "Woodrowa", "Zachariasza", "Zbigniewa", "Zbyszka", "Zdzisława",
    "Zdzisławy", "Zenobii", "Zenobiusza", "Zenona", "Zofii", "Zuzanny", "Zygfryda", "Zygfrydy",
    "Zygmunta", "Żanety",
];
