//! The 66 canonical books

use serde::{Deserialize, Serialize};

/// Number of canonical books
pub const BOOK_COUNT: u8 = 66;

/// Canonical book, in canonical order (Genesis = 1, Revelation = 66)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Book {
    Genesis,
    Exodus,
    Leviticus,
    Numbers,
    Deuteronomy,
    Joshua,
    Judges,
    Ruth,
    #[serde(rename = "1 Samuel")]
    FirstSamuel,
    #[serde(rename = "2 Samuel")]
    SecondSamuel,
    #[serde(rename = "1 Kings")]
    FirstKings,
    #[serde(rename = "2 Kings")]
    SecondKings,
    #[serde(rename = "1 Chronicles")]
    FirstChronicles,
    #[serde(rename = "2 Chronicles")]
    SecondChronicles,
    Ezra,
    Nehemiah,
    Esther,
    Job,
    Psalms,
    Proverbs,
    Ecclesiastes,
    #[serde(rename = "Song of Solomon")]
    SongOfSolomon,
    Isaiah,
    Jeremiah,
    Lamentations,
    Ezekiel,
    Daniel,
    Hosea,
    Joel,
    Amos,
    Obadiah,
    Jonah,
    Micah,
    Nahum,
    Habakkuk,
    Zephaniah,
    Haggai,
    Zechariah,
    Malachi,
    Matthew,
    Mark,
    Luke,
    John,
    Acts,
    Romans,
    #[serde(rename = "1 Corinthians")]
    FirstCorinthians,
    #[serde(rename = "2 Corinthians")]
    SecondCorinthians,
    Galatians,
    Ephesians,
    Philippians,
    Colossians,
    #[serde(rename = "1 Thessalonians")]
    FirstThessalonians,
    #[serde(rename = "2 Thessalonians")]
    SecondThessalonians,
    #[serde(rename = "1 Timothy")]
    FirstTimothy,
    #[serde(rename = "2 Timothy")]
    SecondTimothy,
    Titus,
    Philemon,
    Hebrews,
    James,
    #[serde(rename = "1 Peter")]
    FirstPeter,
    #[serde(rename = "2 Peter")]
    SecondPeter,
    #[serde(rename = "1 John")]
    FirstJohn,
    #[serde(rename = "2 John")]
    SecondJohn,
    #[serde(rename = "3 John")]
    ThirdJohn,
    Jude,
    Revelation,
}

impl Book {
    /// All books in canonical order
    pub const ALL: [Book; BOOK_COUNT as usize] = [
        Book::Genesis,
        Book::Exodus,
        Book::Leviticus,
        Book::Numbers,
        Book::Deuteronomy,
        Book::Joshua,
        Book::Judges,
        Book::Ruth,
        Book::FirstSamuel,
        Book::SecondSamuel,
        Book::FirstKings,
        Book::SecondKings,
        Book::FirstChronicles,
        Book::SecondChronicles,
        Book::Ezra,
        Book::Nehemiah,
        Book::Esther,
        Book::Job,
        Book::Psalms,
        Book::Proverbs,
        Book::Ecclesiastes,
        Book::SongOfSolomon,
        Book::Isaiah,
        Book::Jeremiah,
        Book::Lamentations,
        Book::Ezekiel,
        Book::Daniel,
        Book::Hosea,
        Book::Joel,
        Book::Amos,
        Book::Obadiah,
        Book::Jonah,
        Book::Micah,
        Book::Nahum,
        Book::Habakkuk,
        Book::Zephaniah,
        Book::Haggai,
        Book::Zechariah,
        Book::Malachi,
        Book::Matthew,
        Book::Mark,
        Book::Luke,
        Book::John,
        Book::Acts,
        Book::Romans,
        Book::FirstCorinthians,
        Book::SecondCorinthians,
        Book::Galatians,
        Book::Ephesians,
        Book::Philippians,
        Book::Colossians,
        Book::FirstThessalonians,
        Book::SecondThessalonians,
        Book::FirstTimothy,
        Book::SecondTimothy,
        Book::Titus,
        Book::Philemon,
        Book::Hebrews,
        Book::James,
        Book::FirstPeter,
        Book::SecondPeter,
        Book::FirstJohn,
        Book::SecondJohn,
        Book::ThirdJohn,
        Book::Jude,
        Book::Revelation,
    ];

    /// Look up a book by its 1-based canonical number
    pub fn from_number(number: u8) -> Option<Book> {
        if number == 0 {
            return None;
        }
        Self::ALL.get(number as usize - 1).copied()
    }

    /// 1-based canonical number
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    /// Display name, as printed in verse references
    pub fn name(&self) -> &'static str {
        match self {
            Book::Genesis => "Genesis",
            Book::Exodus => "Exodus",
            Book::Leviticus => "Leviticus",
            Book::Numbers => "Numbers",
            Book::Deuteronomy => "Deuteronomy",
            Book::Joshua => "Joshua",
            Book::Judges => "Judges",
            Book::Ruth => "Ruth",
            Book::FirstSamuel => "1 Samuel",
            Book::SecondSamuel => "2 Samuel",
            Book::FirstKings => "1 Kings",
            Book::SecondKings => "2 Kings",
            Book::FirstChronicles => "1 Chronicles",
            Book::SecondChronicles => "2 Chronicles",
            Book::Ezra => "Ezra",
            Book::Nehemiah => "Nehemiah",
            Book::Esther => "Esther",
            Book::Job => "Job",
            Book::Psalms => "Psalms",
            Book::Proverbs => "Proverbs",
            Book::Ecclesiastes => "Ecclesiastes",
            Book::SongOfSolomon => "Song of Solomon",
            Book::Isaiah => "Isaiah",
            Book::Jeremiah => "Jeremiah",
            Book::Lamentations => "Lamentations",
            Book::Ezekiel => "Ezekiel",
            Book::Daniel => "Daniel",
            Book::Hosea => "Hosea",
            Book::Joel => "Joel",
            Book::Amos => "Amos",
            Book::Obadiah => "Obadiah",
            Book::Jonah => "Jonah",
            Book::Micah => "Micah",
            Book::Nahum => "Nahum",
            Book::Habakkuk => "Habakkuk",
            Book::Zephaniah => "Zephaniah",
            Book::Haggai => "Haggai",
            Book::Zechariah => "Zechariah",
            Book::Malachi => "Malachi",
            Book::Matthew => "Matthew",
            Book::Mark => "Mark",
            Book::Luke => "Luke",
            Book::John => "John",
            Book::Acts => "Acts",
            Book::Romans => "Romans",
            Book::FirstCorinthians => "1 Corinthians",
            Book::SecondCorinthians => "2 Corinthians",
            Book::Galatians => "Galatians",
            Book::Ephesians => "Ephesians",
            Book::Philippians => "Philippians",
            Book::Colossians => "Colossians",
            Book::FirstThessalonians => "1 Thessalonians",
            Book::SecondThessalonians => "2 Thessalonians",
            Book::FirstTimothy => "1 Timothy",
            Book::SecondTimothy => "2 Timothy",
            Book::Titus => "Titus",
            Book::Philemon => "Philemon",
            Book::Hebrews => "Hebrews",
            Book::James => "James",
            Book::FirstPeter => "1 Peter",
            Book::SecondPeter => "2 Peter",
            Book::FirstJohn => "1 John",
            Book::SecondJohn => "2 John",
            Book::ThirdJohn => "3 John",
            Book::Jude => "Jude",
            Book::Revelation => "Revelation",
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
