use std::fmt;

/// Which catalog field a chat command searches by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Artist,
    Genre,
}

impl SearchKind {
    pub fn command(&self) -> &'static str {
        match self {
            SearchKind::Artist => "/artist",
            SearchKind::Genre => "/genre",
        }
    }

    fn example(&self) -> &'static str {
        match self {
            SearchKind::Artist => "Coldplay",
            SearchKind::Genre => "rock",
        }
    }

    fn argument(&self) -> &'static str {
        match self {
            SearchKind::Artist => "an artist name",
            SearchKind::Genre => "a genre",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchKind::Artist => write!(f, "artist"),
            SearchKind::Genre => write!(f, "genre"),
        }
    }
}

/// What an inbound chat message asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Start,
    ArtistQuery(String),
    GenreQuery(String),
    MissingArgument(SearchKind),
    Unrecognized(String),
}

impl Intent {
    /// Classifies a message text.
    ///
    /// The command is the first whitespace-separated word, optionally suffixed
    /// with `@botname`; the argument is the trimmed remainder.
    pub fn parse(text: &str) -> Intent {
        let trimmed = text.trim();
        let (head, argument) = match trimmed.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (trimmed, ""),
        };
        let command = head.split_once('@').map_or(head, |(command, _)| command);

        match command {
            "/start" | "/help" => Intent::Start,
            "/artist" if argument.is_empty() => Intent::MissingArgument(SearchKind::Artist),
            "/artist" => Intent::ArtistQuery(argument.to_string()),
            "/genre" if argument.is_empty() => Intent::MissingArgument(SearchKind::Genre),
            "/genre" => Intent::GenreQuery(argument.to_string()),
            _ => Intent::Unrecognized(text.to_string()),
        }
    }
}

/// Reply to `/start` and `/help`, sent together with the command keyboard.
pub const WELCOME: &str = "Hi! I'm a music bot 🎵\n\
    I can find the top 5 tracks for an artist or a genre.\n\
    Pick one of the buttons below or type a command:\n\
    /artist <artist name>\n\
    /genre <genre>";

pub const NOT_UNDERSTOOD: &str =
    "I don't understand this command. Use the buttons or send /start to begin.";

/// Reply when the search backend returned an error rather than an empty result.
pub const SEARCH_FAILED: &str = "Searching Spotify failed, please try again later.";

/// Asks for the missing argument of a search command.
///
/// # Arguments
///
/// * `kind` - Which command was sent without an argument
///
/// # Returns
///
/// The hint text with an example invocation, e.g. `/genre rock`.
pub fn usage_hint(kind: SearchKind) -> String {
    format!(
        "Please enter {argument} after the {command} command, for example:\n{command} {example}",
        argument = kind.argument(),
        command = kind.command(),
        example = kind.example()
    )
}

/// Reply for a search that matched no tracks.
pub fn not_found(kind: SearchKind, name: &str) -> String {
    format!("Sorry, no tracks found for {} \"{}\".", kind, name)
}

/// First line of a result listing.
///
/// # Arguments
///
/// * `kind` - Artist or genre search
/// * `name` - The name the user searched for
/// * `count` - Number of tracks that follow
pub fn header(kind: SearchKind, name: &str, count: usize) -> String {
    match kind {
        SearchKind::Artist => format!("Top {} tracks by artist \"{}\":", count, name),
        SearchKind::Genre => format!("Top {} tracks in genre \"{}\":", count, name),
    }
}
