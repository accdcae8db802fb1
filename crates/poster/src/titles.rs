//! Static lookup tables backing the poster resolution cascade.
//!
//! The catalog's film titles are invented, so the cascade maps them onto
//! real, well-known releases before asking the provider. All selection
//! over these tables is deterministic (see `resolver::stable_hash`).

/// Curated fictional-title to real-title equivalents, keyed by the
/// catalog's uppercase titles.
pub(crate) const REAL_TITLE_MAP: &[(&str, &str)] = &[
    ("ACADEMY DINOSAUR", "Jurassic Park"),
    ("ACE GOLDFINGER", "Goldfinger"),
    ("ADAPTATION HOLES", "The Shawshank Redemption"),
    ("AFFAIR PREJUDICE", "Pride and Prejudice"),
    ("AFRICAN EGG", "The Lion King"),
    ("AGENT TRUMAN", "The Truman Show"),
    ("AIRPLANE SIERRA", "Top Gun"),
    ("AIRPORT POLLOCK", "Airport"),
    ("ALABAMA DEVIL", "The Devil Wears Prada"),
    ("ALADDIN CALENDAR", "Aladdin"),
    ("ALAMO VIDEOTAPE", "The Alamo"),
    ("ALASKA PHANTOM", "The Phantom"),
    ("ALI FOREVER", "Ali"),
    ("ALICE FANTASIA", "Alice in Wonderland"),
    ("ALIEN CENTER", "Alien"),
    ("ALLEY EVOLUTION", "Evolution"),
    ("ALONE TRIP", "Into the Wild"),
    ("ALTER VICTORY", "Victory"),
    ("AMADEUS HOLY", "Amadeus"),
    ("AMELIE HELLFIGHTERS", "Amélie"),
    ("AMERICAN CIRCUS", "The Greatest Showman"),
    ("AMISTAD MIDSUMMER", "Amistad"),
    ("ANALYZE HOOSIERS", "Hoosiers"),
    ("ANGELS LIFE", "Life is Beautiful"),
    ("ANNIE IDENTITY", "The Bourne Identity"),
    ("ANONYMOUS HUMAN", "The Matrix"),
    ("ANTHEM LUKE", "Star Wars"),
    ("ANTITRUST TOMATOES", "Attack of the Killer Tomatoes"),
    ("ANYTHING SAVANNAH", "Forrest Gump"),
    ("APACHE DIVINE", "Dances with Wolves"),
    ("APOCALYPSE FLAMINGOS", "Apocalypse Now"),
    ("ARABIA DOGMA", "Lawrence of Arabia"),
    ("ARACHNOPHOBIA ROLLERCOASTER", "Arachnophobia"),
    ("ARGONAUTS TOWN", "Jason and the Argonauts"),
    ("ARIZONA BANG", "Raising Arizona"),
    ("ARK RIDGEMONT", "Fast Times at Ridgemont High"),
    ("ARMAGEDDON LOST", "Armageddon"),
    ("ARMY FLINTSTONES", "The Flintstones"),
    ("ARTIST COLDBLOODED", "The Artist"),
    ("ATLANTIS CAUSE", "Atlantis: The Lost Empire"),
    ("ATTACK NOON", "High Noon"),
    ("ATTRACTION NEWTON", "The Theory of Everything"),
    ("AUTUMN CROW", "The Crow"),
    ("BABY HALL", "Baby Driver"),
    ("BACHELOR JAWBREAKER", "Jawbreaker"),
    ("BADMAN DAWN", "Batman Begins"),
    ("BAG BEETHOVEN", "Beethoven"),
    ("BALLOON HOMEWARD", "Homeward Bound"),
    ("BANG KWAI", "The Bridge on the River Kwai"),
    ("BANGER PINOCCHIO", "Pinocchio"),
    ("BARBARELLA STREETCAR", "Barbarella"),
    ("BAREFOOT MANCHURIAN", "The Manchurian Candidate"),
    ("BASIC EASY", "Easy Rider"),
    ("BEACH HEARTBREAKERS", "Heartbreakers"),
    ("BEAR GRACELAND", "Graceland"),
    ("BEAST HUNCHBACK", "The Hunchback of Notre Dame"),
    ("BEAUTY GREASE", "Grease"),
    ("BED HIGHBALL", "High Society"),
    ("BEDAZZLED MARRIED", "Bedazzled"),
    ("BEETHOVEN EXORCIST", "The Exorcist"),
];

/// Well-known titles per release year, used when the catalog title maps
/// to nothing but the year is known.
pub(crate) const POPULAR_BY_YEAR: &[(i32, &[&str])] = &[
    (
        2006,
        &[
            "The Departed",
            "Casino Royale",
            "Pirates of the Caribbean: Dead Man's Chest",
            "The Devil Wears Prada",
            "Ice Age: The Meltdown",
        ],
    ),
    (
        2005,
        &[
            "Star Wars: Episode III",
            "Harry Potter and the Goblet of Fire",
            "The Chronicles of Narnia",
            "War of the Worlds",
            "King Kong",
        ],
    ),
    (
        2004,
        &[
            "Shrek 2",
            "Spider-Man 2",
            "The Incredibles",
            "Harry Potter and the Prisoner of Azkaban",
            "I, Robot",
        ],
    ),
    (
        2003,
        &[
            "Finding Nemo",
            "The Lord of the Rings: The Return of the King",
            "Pirates of the Caribbean",
            "The Matrix Reloaded",
            "X2: X-Men United",
        ],
    ),
    (
        2002,
        &[
            "Spider-Man",
            "The Lord of the Rings: The Two Towers",
            "Star Wars: Episode II",
            "Harry Potter and the Chamber of Secrets",
            "Ice Age",
        ],
    ),
    (
        2001,
        &[
            "Harry Potter and the Philosopher's Stone",
            "The Lord of the Rings: The Fellowship of the Ring",
            "Shrek",
            "Monsters, Inc.",
            "The Fast and the Furious",
        ],
    ),
    (
        2000,
        &[
            "Gladiator",
            "Cast Away",
            "What Women Want",
            "Dinosaur",
            "How the Grinch Stole Christmas",
        ],
    ),
    (
        1999,
        &[
            "Star Wars: Episode I",
            "The Sixth Sense",
            "Toy Story 2",
            "Austin Powers: The Spy Who Shagged Me",
            "The Matrix",
        ],
    ),
    (
        1998,
        &[
            "Titanic",
            "Armageddon",
            "Saving Private Ryan",
            "There's Something About Mary",
            "The Truman Show",
        ],
    ),
    (
        1997,
        &[
            "The Lost World: Jurassic Park",
            "Men in Black",
            "Tomorrow Never Dies",
            "Air Force One",
            "As Good as It Gets",
        ],
    ),
];

/// Year-independent fallback pool, tried when nothing above matched.
pub(crate) const FALLBACK_TITLES: &[&str] = &[
    "The Shawshank Redemption",
    "The Godfather",
    "The Dark Knight",
    "Pulp Fiction",
    "The Lord of the Rings: The Return of the King",
    "Forrest Gump",
    "Star Wars",
    "The Matrix",
    "Goodfellas",
    "One Flew Over the Cuckoo's Nest",
    "Inception",
    "The Empire Strikes Back",
    "The Silence of the Lambs",
    "Saving Private Ryan",
    "Schindler's List",
    "Casablanca",
    "The Departed",
    "The Prestige",
    "Gladiator",
    "Titanic",
    "The Lion King",
    "Back to the Future",
    "Terminator 2: Judgment Day",
    "Alien",
    "Raiders of the Lost Ark",
    "Jurassic Park",
    "The Avengers",
    "Iron Man",
    "Spider-Man",
    "Batman Begins",
];

/// Final-tier glyph palette. Resolution always terminates here at worst.
pub(crate) const GLYPHS: &[&str] = &["🎬", "🎥", "📽️", "🎞️", "🍿", "🎪", "🎭", "🎨", "🌟", "✨"];

/// Glyph used when the title itself is empty.
pub(crate) const DEFAULT_GLYPH: &str = "🎬";

/// Real-title equivalent for a catalog title, if curated.
pub(crate) fn map_to_real_title(title: &str) -> Option<&'static str> {
    let upper = title.to_uppercase();
    REAL_TITLE_MAP
        .iter()
        .find(|(fictional, _)| *fictional == upper)
        .map(|(_, real)| *real)
}

/// Popular-title pool for a release year, if tabulated.
pub(crate) fn popular_titles_for_year(year: i32) -> Option<&'static [&'static str]> {
    POPULAR_BY_YEAR
        .iter()
        .find(|(tabulated, _)| *tabulated == year)
        .map(|(_, titles)| *titles)
}
