// Static vocabularies for seed generation

pub const ROLES: &[&str] = &[
    "Athlete",
    "Singer",
    "Actor",
    "Comedian",
    "Director",
    "Influencer",
    "Author",
    "DJ",
    "Producer",
    "Esports Athlete",
];

pub fn celebrities(role: &str) -> &'static [&'static str] {
    match role {
        "Athlete" => &[
            "LeBron James", "Michael Jordan", "Kobe Bryant", "Tom Brady", "Serena Williams",
            "Lionel Messi", "Cristiano Ronaldo", "Stephen Curry", "Shohei Ohtani", "Usain Bolt",
            "Simone Biles", "Kevin Durant", "Derek Jeter", "Mike Tyson", "Roger Federer",
            "Novak Djokovic", "Rafael Nadal", "Patrick Mahomes", "Wayne Gretzky", "Megan Rapinoe",
        ],
        "Singer" => &[
            "Taylor Swift", "Beyoncé", "Rihanna", "Adele", "Ed Sheeran",
            "Billie Eilish", "Bruno Mars", "The Weeknd", "Drake", "Harry Styles",
            "Dua Lipa", "Post Malone", "Olivia Rodrigo", "Bad Bunny", "Ariana Grande",
            "Kendrick Lamar", "Doja Cat", "SZA", "Travis Scott", "Justin Bieber",
        ],
        "Actor" => &[
            "Robert Downey Jr.", "Scarlett Johansson", "Keanu Reeves", "Jennifer Lawrence",
            "Denzel Washington", "Leonardo DiCaprio", "Tom Hanks", "Zendaya", "Ryan Gosling",
            "Margot Robbie", "Chris Hemsworth", "Emma Stone", "Pedro Pascal", "Sydney Sweeney",
            "Cillian Murphy", "Emily Blunt", "Ana de Armas", "Jason Momoa", "Paul Rudd", "Brie Larson",
        ],
        "Comedian" => &[
            "Dave Chappelle", "Kevin Hart", "John Mulaney", "Ali Wong", "Trevor Noah",
            "Hasan Minhaj", "Ricky Gervais", "Tiffany Haddish", "Bo Burnham", "Nate Bargatze",
        ],
        "Director" => &[
            "Christopher Nolan", "Greta Gerwig", "Quentin Tarantino", "Jordan Peele",
            "Denis Villeneuve", "Martin Scorsese", "Patty Jenkins", "Taika Waititi",
            "Ryan Coogler", "Guillermo del Toro",
        ],
        "Influencer" => &[
            "MrBeast", "Charli D'Amelio", "Ninja", "Mark Rober", "Emma Chamberlain",
            "KSI", "Logan Paul", "Lilly Singh", "PewDiePie", "Marques Brownlee",
        ],
        "Author" => &[
            "Stephen King", "Neil Gaiman", "Margaret Atwood", "Colleen Hoover", "George R.R. Martin",
            "Brandon Sanderson", "Malcolm Gladwell", "Michelle Obama", "James Patterson", "Rick Riordan",
        ],
        "DJ" => &[
            "Calvin Harris", "Skrillex", "Deadmau5", "David Guetta", "Marshmello",
            "Zedd", "Armin van Buuren", "Diplo", "Kygo", "Alesso",
        ],
        "Producer" => &[
            "Pharrell Williams", "Rick Rubin", "Dr. Dre", "Metro Boomin", "Timbaland",
            "Mark Ronson", "Mike Will Made-It", "Finneas O'Connell", "Jack Antonoff", "Max Martin",
        ],
        "Esports Athlete" => &[
            "Faker", "s1mple", "N0tail", "TenZ", "Bugha", "Ninja", "Magisk", "MONESY", "ZywOo", "Caps",
        ],
        _ => &[],
    }
}

pub fn item_templates(role: &str) -> &'static [&'static str] {
    match role {
        "Athlete" => &[
            "{year} {team} jersey",
            "Game-used {sport} ball",
            "{event} ticket stub",
            "{team} warmup jacket",
            "Replica championship ring box",
            "{year} All-Star cap",
            "Limited poster: {event}",
            "Custom photo: {year} season",
            "Mini-helmet {team}",
            "Signed cleat {year}",
        ],
        "Singer" => &[
            "{album} vinyl",
            "{tour} tour poster",
            "Concert setlist {year}",
            "Microphone windscreen",
            "Acoustic guitar pickguard",
            "Tour hoodie {year}",
            "Lyric sheet facsimile",
            "Backstage pass {tour}",
            "CD booklet {album}",
            "Promo photo {year}",
        ],
        "Actor" => &[
            "{film} movie poster",
            "{film} script cover",
            "Blu-ray slipcover {film}",
            "Premiere ticket {year}",
            "Character photo still ({film})",
            "Prop replica ({prop})",
            "Press kit one-sheet",
            "Lobby card ({film})",
            "Director’s chair back ({film})",
            "Clapperboard plate ({film})",
        ],
        "Comedian" => &[
            "{tour} tour poster",
            "Show flyer {venue} ({year})",
            "Mic flag cube",
            "Netflix special card ({special})",
            "Green room pass {year}",
            "Promo 8x10 headshot",
            "Ticket stub {venue}",
            "Merch tee ({tour})",
            "Set list card ({year})",
            "Stool-top coaster ({venue})",
        ],
        "Director" => &[
            "{film} call sheet (facsimile)",
            "Storyboard card ({film})",
            "Festival pass ({year})",
            "Slate label ({film})",
            "Press screening ticket",
            "One-sheet ({film})",
            "Location pass ({film})",
            "Q&A card ({year})",
            "Premiere program ({film})",
            "Draft cover page ({film})",
        ],
        "Influencer" => &[
            "Meet & greet badge ({year})",
            "Channel banner print",
            "Merch hoodie drop ({year})",
            "Creator Games pass",
            "Thumbnail board ({series})",
            "Signed Polaroid ({year})",
            "Sticker sheet ({series})",
            "Camera skin ({year})",
            "Creator card ({platform})",
            "Challenge poster ({series})",
        ],
        "Author" => &[
            "{book} hardcover dust jacket",
            "ARC cover ({book})",
            "Bookplate ({year})",
            "Tour stop flyer ({year})",
            "Bookmark ({book})",
            "Reading pass ({venue})",
            "Book club card ({book})",
            "Signing ticket ({venue})",
            "Promo postcard ({book})",
            "Manuscript title page ({book})",
        ],
        "DJ" => &[
            "Festival wristband ({year})",
            "Setlist card ({festival})",
            "Slipmat ({year})",
            "USB shell ({year})",
            "Backstage pass ({festival})",
            "Tour poster ({tour})",
            "Headphone case plate",
            "Promo one-sheet ({year})",
            "Lanyard tag ({festival})",
            "Flyer ({club})",
        ],
        "Producer" => &[
            "Studio track sheet ({year})",
            "808 faceplate ({year})",
            "Session notes card",
            "Plat plaque card ({album})",
            "Console strip ({year})",
            "Merch tee ({year})",
            "Vinyl jacket ({album})",
            "Press card ({album})",
            "Patch bay label",
            "Promo postcard ({album})",
        ],
        "Esports Athlete" => &[
            "{org} jersey ({year})",
            "Stage pass ({event})",
            "Mousepad ({year})",
            "Team flag ({org})",
            "LAN badge ({event})",
            "Poster ({event})",
            "Keyboard frame ({year})",
            "Player card ({event})",
            "Coach board ({org})",
            "Scrim sheet ({year})",
        ],
        _ => &[],
    }
}

/// Sport and team for athletes whose memorabilia should name them
pub fn sport_and_team(celebrity: &str) -> Option<(&'static str, &'static str)> {
    let pair = match celebrity {
        "LeBron James" => ("basketball", "Cleveland Cavaliers"),
        "Michael Jordan" => ("basketball", "Chicago Bulls"),
        "Kobe Bryant" => ("basketball", "Los Angeles Lakers"),
        "Tom Brady" => ("football", "New England Patriots"),
        "Serena Williams" => ("tennis", "USA"),
        "Lionel Messi" => ("soccer", "Argentina"),
        "Cristiano Ronaldo" => ("soccer", "Portugal"),
        "Stephen Curry" => ("basketball", "Golden State Warriors"),
        "Shohei Ohtani" => ("baseball", "Los Angeles Dodgers"),
        "Usain Bolt" => ("track", "Jamaica"),
        "Simone Biles" => ("gymnastics", "USA"),
        "Kevin Durant" => ("basketball", "Phoenix Suns"),
        "Derek Jeter" => ("baseball", "New York Yankees"),
        "Mike Tyson" => ("boxing", "USA"),
        "Roger Federer" => ("tennis", "Switzerland"),
        "Novak Djokovic" => ("tennis", "Serbia"),
        "Rafael Nadal" => ("tennis", "Spain"),
        "Patrick Mahomes" => ("football", "Kansas City Chiefs"),
        "Wayne Gretzky" => ("hockey", "Edmonton Oilers"),
        "Megan Rapinoe" => ("soccer", "USA"),
        _ => return None,
    };
    Some(pair)
}

pub const ALBUMS: &[&str] = &[
    "1989", "Lemonade", "21", "After Hours", "Take Care", "Folklore", "Scorpion", "Starboy", "Sour", "UTOPIA",
];
pub const TOURS: &[&str] = &[
    "Eras", "Formation", "Monsters of Pop", "World Tour", "Summer Stadiums", "Neon Nights", "Happier Than Ever",
];
pub const EVENTS: &[&str] = &[
    "Wimbledon Final", "NBA Finals", "Super Bowl", "World Cup Final", "US Open", "Champions League Final",
];
pub const ATHLETE_EVENTS: &[&str] = &["NBA Finals", "Super Bowl", "World Series", "Wimbledon Final", "US Open"];
pub const FILMS: &[&str] = &[
    "Oppenheimer", "Dune", "Barbie", "Titanic", "The Matrix", "Pulp Fiction", "Avengers: Endgame", "John Wick",
];
pub const PROPS: &[&str] = &["helmet", "shield", "gauntlet", "ring", "badge", "watch"];
pub const VENUES: &[&str] = &["Madison Square Garden", "The Forum", "O2 Arena", "Comedy Cellar", "Laugh Factory"];
pub const SPECIALS: &[&str] = &["Paper Tiger", "Tamborine", "Sticks & Stones", "Baby Cobra", "Homecoming"];
pub const SERIES: &[&str] = &["Challenge Series", "24 Hours", "Tech Reviews", "Creator Games", "Daily Vlog"];
pub const PLATFORMS: &[&str] = &["YouTube", "Twitch", "TikTok", "Instagram"];
pub const BOOKS: &[&str] = &["The Long Night", "Ocean of Stars", "Electric Dreams", "Paper Hearts", "Hidden Doors"];
pub const FESTIVALS: &[&str] = &["Coachella", "Ultra", "Tomorrowland", "EDC", "Lollapalooza"];
pub const CLUBS: &[&str] = &["Ministry of Sound", "Fabric", "Pacha", "Berghain", "Output"];
pub const ORGS: &[&str] = &["T1", "G2 Esports", "Fnatic", "Team Liquid", "Cloud9"];
pub const ESPORTS_EVENTS: &[&str] = &["Worlds", "IEM Katowice", "The International", "Valorant Masters", "ESL One"];
pub const TEAMS: &[&str] = &[
    "Chicago Bulls", "Los Angeles Lakers", "New England Patriots", "Golden State Warriors", "New York Yankees",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_people_and_templates() {
        for role in ROLES {
            assert!(!celebrities(role).is_empty(), "{} has no celebrities", role);
            assert!(!item_templates(role).is_empty(), "{} has no templates", role);
        }
    }

    #[test]
    fn test_every_athlete_has_sport() {
        for name in celebrities("Athlete") {
            assert!(sport_and_team(name).is_some(), "{} missing sport", name);
        }
        assert!(sport_and_team("Taylor Swift").is_none());
    }
}
