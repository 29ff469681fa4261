use super::{LeagueConfig, SourceBinding, Sport};
use crate::scoring::rules::{Matcher, Rule};
use crate::scoring::scorer::{PercentRange, DEFAULT_BAND, NARROW_BAND};

// ── Profiles ────────────────────────────────────────────────────────────────
//
// Leagues differ mostly by profile; each entry below overrides identity,
// source, fixture table and rules.

const SOCCER_TOP: LeagueConfig = LeagueConfig {
    key: "",
    name: "",
    flag: "⚽",
    sport: Sport::Soccer,
    market_efficiency: PercentRange::new(62, 88),
    team_performance: PercentRange::new(58, 90),
    key_players: PercentRange::new(55, 88),
    confidence_boost: 5,
    confidence_cap: 92,
    draw_eligible: true,
    draw_threshold: 0.04,
    score_band: DEFAULT_BAND,
    source: None,
    teams: &[],
    rules: &[],
};

const SOCCER_SECONDARY: LeagueConfig = LeagueConfig {
    market_efficiency: PercentRange::new(55, 80),
    team_performance: PercentRange::new(52, 82),
    key_players: PercentRange::new(50, 80),
    confidence_boost: 3,
    confidence_cap: 85,
    draw_threshold: 0.05,
    score_band: NARROW_BAND,
    ..SOCCER_TOP
};

const US_MAJOR: LeagueConfig = LeagueConfig {
    flag: "🇺🇸",
    sport: Sport::Basketball,
    market_efficiency: PercentRange::new(65, 90),
    team_performance: PercentRange::new(60, 92),
    key_players: PercentRange::new(62, 94),
    confidence_boost: 6,
    confidence_cap: 90,
    draw_eligible: false,
    draw_threshold: 0.0,
    ..SOCCER_TOP
};

const INDIVIDUAL: LeagueConfig = LeagueConfig {
    flag: "🎾",
    sport: Sport::Tennis,
    market_efficiency: PercentRange::new(60, 85),
    team_performance: PercentRange::new(55, 88),
    key_players: PercentRange::new(70, 95),
    confidence_boost: 4,
    confidence_cap: 88,
    draw_eligible: false,
    draw_threshold: 0.0,
    ..SOCCER_TOP
};

const OTHER: LeagueConfig = LeagueConfig {
    market_efficiency: PercentRange::new(50, 78),
    team_performance: PercentRange::new(50, 80),
    key_players: PercentRange::new(50, 80),
    confidence_boost: 2,
    confidence_cap: 82,
    draw_eligible: false,
    draw_threshold: 0.0,
    score_band: NARROW_BAND,
    ..SOCCER_TOP
};

const fn espn(sport: &'static str, league: &'static str) -> Option<SourceBinding> {
    Some(SourceBinding::Espn { sport, league })
}

// ── Rule tables ─────────────────────────────────────────────────────────────

const PREMIER_LEAGUE_RULES: &[Rule] = &[
    Rule::new("north_london_derby", Matcher::Fixture("ARSENAL", "TOTTENHAM"), -6),
    Rule::new("manchester_derby", Matcher::Fixture("MANCHESTER UNITED", "MANCHESTER CITY"), -5),
    Rule::new("merseyside_derby", Matcher::Fixture("LIVERPOOL", "EVERTON"), -5),
    Rule::new("city_form", Matcher::TeamContainsAll(&["MANCHESTER", "CITY"]), 8),
    Rule::new("anfield", Matcher::Contains("LIVERPOOL"), 6),
    Rule::new("arsenal_form", Matcher::Contains("ARSENAL"), 5),
];

const LA_LIGA_RULES: &[Rule] = &[
    Rule::new("el_clasico", Matcher::Fixture("REAL MADRID", "BARCELONA"), -8),
    Rule::new("madrid_derby", Matcher::Fixture("REAL MADRID", "ATLETICO"), -6),
    Rule::new("sevilla_derby", Matcher::Fixture("SEVILLA", "BETIS"), -4),
    Rule::new("madrid_form", Matcher::TeamContainsAll(&["REAL", "MADRID"]), 10),
    Rule::new("barca_form", Matcher::Contains("BARCELONA"), 9),
];

const SERIE_A_RULES: &[Rule] = &[
    Rule::new("derby_della_madonnina", Matcher::Fixture("INTER", "MILAN"), -6),
    Rule::new("derby_della_capitale", Matcher::Fixture("ROMA", "LAZIO"), -6),
    Rule::new("derby_d_italia", Matcher::Fixture("INTER", "JUVENTUS"), -4),
    Rule::new("inter_form", Matcher::Contains("INTER"), 7),
];

const BUNDESLIGA_RULES: &[Rule] = &[
    Rule::new("der_klassiker", Matcher::Fixture("BAYERN", "DORTMUND"), -6),
    Rule::new("bayern_form", Matcher::Contains("BAYERN"), 12),
    Rule::new("leverkusen_form", Matcher::Contains("LEVERKUSEN"), 6),
];

const LIGUE_1_RULES: &[Rule] = &[
    Rule::new("le_classique", Matcher::Fixture("PARIS", "MARSEILLE"), -5),
    Rule::new("psg_form", Matcher::TeamContainsAll(&["PARIS", "SAINT"]), 12),
];

const UEFA_RULES: &[Rule] = &[
    Rule::new("heavyweight_clash", Matcher::Fixture("REAL MADRID", "MANCHESTER CITY"), -6),
    Rule::new("madrid_pedigree", Matcher::TeamContainsAll(&["REAL", "MADRID"]), 10),
    Rule::new("bayern_pedigree", Matcher::Contains("BAYERN"), 7),
];

const A_LEAGUE_RULES: &[Rule] = &[
    Rule::new("melbourne_derby", Matcher::Fixture("MELBOURNE VICTORY", "MELBOURNE CITY"), -5),
    Rule::new("sydney_derby", Matcher::Fixture("SYDNEY FC", "WESTERN SYDNEY"), -5),
    Rule::new("victory_form", Matcher::TeamContainsAll(&["MELBOURNE", "VICTORY"]), 28),
    Rule::new("city_form", Matcher::TeamContainsAll(&["MELBOURNE", "CITY"]), 12),
    Rule::new("wanderers_fighting_spirit", Matcher::Contains("WANDERERS"), 8),
];

const LIGA_MX_RULES: &[Rule] = &[
    Rule::new("clasico_nacional", Matcher::Fixture("AMERICA", "GUADALAJARA"), -6),
    Rule::new("clasico_regio", Matcher::Fixture("MONTERREY", "TIGRES"), -5),
    Rule::new("america_form", Matcher::Contains("AMERICA"), 6),
];

const MLS_RULES: &[Rule] = &[
    Rule::new("el_trafico", Matcher::Fixture("LA GALAXY", "LAFC"), -5),
    Rule::new("cascadia", Matcher::Fixture("SEATTLE", "PORTLAND"), -4),
];

const NBA_RULES: &[Rule] = &[
    Rule::new("finals_rematch", Matcher::Fixture("CELTICS", "MAVERICKS"), -3),
    Rule::new("celtics_form", Matcher::Contains("CELTICS"), 7),
    Rule::new("nuggets_altitude", Matcher::Contains("NUGGETS"), 5),
];

const NFL_RULES: &[Rule] = &[
    Rule::new("chiefs_form", Matcher::Contains("CHIEFS"), 8),
    Rule::new("division_rivalry", Matcher::Fixture("COWBOYS", "EAGLES"), -4),
];

const TENNIS_RULES: &[Rule] = &[
    Rule::new("big_rivalry", Matcher::Fixture("SINNER", "ALCARAZ"), -4),
    Rule::new("djokovic_experience", Matcher::Contains("DJOKOVIC"), 9),
];

// ── Leagues ─────────────────────────────────────────────────────────────────

pub const LEAGUES: &[LeagueConfig] = &[
    LeagueConfig {
        key: "PREMIER_LEAGUE",
        name: "English Premier League",
        flag: "🏴󠁧󠁢󠁥󠁮󠁧󠁿",
        source: espn("soccer", "eng.1"),
        teams: &[
            ("Arsenal", "Chelsea"),
            ("Liverpool", "Manchester City"),
            ("Manchester United", "Tottenham Hotspur"),
            ("Newcastle United", "Aston Villa"),
        ],
        rules: PREMIER_LEAGUE_RULES,
        ..SOCCER_TOP
    },
    LeagueConfig {
        key: "LA_LIGA",
        name: "Spanish La Liga",
        flag: "🇪🇸",
        source: espn("soccer", "esp.1"),
        teams: &[
            ("Real Madrid", "Barcelona"),
            ("Atletico Madrid", "Sevilla"),
            ("Real Sociedad", "Athletic Club"),
            ("Villarreal", "Real Betis"),
        ],
        rules: LA_LIGA_RULES,
        ..SOCCER_TOP
    },
    LeagueConfig {
        key: "SERIE_A",
        name: "Italian Serie A",
        flag: "🇮🇹",
        source: espn("soccer", "ita.1"),
        teams: &[
            ("Inter Milan", "AC Milan"),
            ("Juventus", "Napoli"),
            ("AS Roma", "Lazio"),
            ("Atalanta", "Fiorentina"),
        ],
        rules: SERIE_A_RULES,
        ..SOCCER_TOP
    },
    LeagueConfig {
        key: "BUNDESLIGA",
        name: "German Bundesliga",
        flag: "🇩🇪",
        source: espn("soccer", "ger.1"),
        teams: &[
            ("Bayern Munich", "Borussia Dortmund"),
            ("Bayer Leverkusen", "RB Leipzig"),
            ("VfB Stuttgart", "Eintracht Frankfurt"),
        ],
        rules: BUNDESLIGA_RULES,
        ..SOCCER_TOP
    },
    LeagueConfig {
        key: "LIGUE_1",
        name: "French Ligue 1",
        flag: "🇫🇷",
        source: espn("soccer", "fra.1"),
        teams: &[
            ("Paris Saint-Germain", "Marseille"),
            ("Monaco", "Lyon"),
            ("Lille", "Nice"),
        ],
        rules: LIGUE_1_RULES,
        ..SOCCER_TOP
    },
    LeagueConfig {
        key: "UEFA",
        name: "UEFA Champions League",
        flag: "🇪🇺",
        source: espn("soccer", "uefa.champions"),
        teams: &[
            ("Real Madrid", "Manchester City"),
            ("Bayern Munich", "Paris Saint-Germain"),
            ("Inter Milan", "Arsenal"),
        ],
        rules: UEFA_RULES,
        ..SOCCER_TOP
    },
    LeagueConfig {
        key: "EUROPA_LEAGUE",
        name: "UEFA Europa League",
        flag: "🇪🇺",
        source: espn("soccer", "uefa.europa"),
        teams: &[
            ("AS Roma", "Ajax"),
            ("Tottenham Hotspur", "Porto"),
            ("Lazio", "Olympiacos"),
        ],
        ..SOCCER_SECONDARY
    },
    LeagueConfig {
        key: "CHAMPIONSHIP",
        name: "English Championship",
        flag: "🏴󠁧󠁢󠁥󠁮󠁧󠁿",
        source: espn("soccer", "eng.2"),
        teams: &[
            ("Leeds United", "Sunderland"),
            ("Burnley", "Sheffield United"),
            ("Norwich City", "Middlesbrough"),
        ],
        ..SOCCER_SECONDARY
    },
    LeagueConfig {
        key: "EREDIVISIE",
        name: "Dutch Eredivisie",
        flag: "🇳🇱",
        source: espn("soccer", "ned.1"),
        teams: &[("Ajax", "PSV Eindhoven"), ("Feyenoord", "AZ Alkmaar"), ("FC Twente", "FC Utrecht")],
        ..SOCCER_SECONDARY
    },
    LeagueConfig {
        key: "PRIMEIRA_LIGA",
        name: "Portuguese Primeira Liga",
        flag: "🇵🇹",
        source: espn("soccer", "por.1"),
        teams: &[("Benfica", "Porto"), ("Sporting CP", "Braga"), ("Vitoria SC", "Boavista")],
        ..SOCCER_SECONDARY
    },
    LeagueConfig {
        key: "SCOTTISH_PREMIERSHIP",
        name: "Scottish Premiership",
        flag: "🏴󠁧󠁢󠁳󠁣󠁴󠁿",
        source: espn("soccer", "sco.1"),
        teams: &[("Celtic", "Rangers"), ("Aberdeen", "Hearts"), ("Hibernian", "Motherwell")],
        ..SOCCER_SECONDARY
    },
    LeagueConfig {
        key: "MLS",
        name: "Major League Soccer",
        flag: "🇺🇸",
        source: espn("soccer", "usa.1"),
        teams: &[
            ("LA Galaxy", "LAFC"),
            ("Inter Miami", "Orlando City"),
            ("Seattle Sounders", "Portland Timbers"),
        ],
        rules: MLS_RULES,
        ..SOCCER_SECONDARY
    },
    LeagueConfig {
        key: "LIGA_MX",
        name: "Liga MX",
        flag: "🇲🇽",
        source: espn("soccer", "mex.1"),
        teams: &[
            ("Club America", "Guadalajara"),
            ("Monterrey", "Tigres UANL"),
            ("Cruz Azul", "Pumas UNAM"),
        ],
        rules: LIGA_MX_RULES,
        ..SOCCER_SECONDARY
    },
    LeagueConfig {
        key: "BRASILEIRAO",
        name: "Brazilian Serie A",
        flag: "🇧🇷",
        source: espn("soccer", "bra.1"),
        teams: &[("Flamengo", "Palmeiras"), ("Corinthians", "Sao Paulo"), ("Gremio", "Internacional")],
        ..SOCCER_SECONDARY
    },
    LeagueConfig {
        key: "ARGENTINA_PRIMERA",
        name: "Argentine Primera Division",
        flag: "🇦🇷",
        source: espn("soccer", "arg.1"),
        teams: &[("Boca Juniors", "River Plate"), ("Racing Club", "Independiente"), ("San Lorenzo", "Huracan")],
        ..SOCCER_SECONDARY
    },
    LeagueConfig {
        key: "A_LEAGUE",
        name: "Australian A-League",
        flag: "🇦🇺",
        source: espn("soccer", "aus.1"),
        teams: &[
            ("Melbourne Victory", "Melbourne City"),
            ("Sydney FC", "Western Sydney Wanderers"),
            ("Adelaide United", "Perth Glory"),
        ],
        rules: A_LEAGUE_RULES,
        ..SOCCER_SECONDARY
    },
    LeagueConfig {
        key: "J_LEAGUE",
        name: "Japanese J1 League",
        flag: "🇯🇵",
        source: espn("soccer", "jpn.1"),
        teams: &[("Kawasaki Frontale", "Yokohama F. Marinos"), ("Urawa Red Diamonds", "Kashima Antlers")],
        ..SOCCER_SECONDARY
    },
    LeagueConfig {
        key: "SAUDI_PRO_LEAGUE",
        name: "Saudi Pro League",
        flag: "🇸🇦",
        teams: &[("Al Hilal", "Al Nassr"), ("Al Ittihad", "Al Ahli")],
        ..SOCCER_SECONDARY
    },
    LeagueConfig {
        key: "NBA",
        name: "National Basketball Association",
        flag: "🏀",
        source: espn("basketball", "nba"),
        teams: &[
            ("Boston Celtics", "Los Angeles Lakers"),
            ("Denver Nuggets", "Golden State Warriors"),
            ("Milwaukee Bucks", "Dallas Mavericks"),
        ],
        rules: NBA_RULES,
        ..US_MAJOR
    },
    LeagueConfig {
        key: "WNBA",
        name: "Women's National Basketball Association",
        flag: "🏀",
        source: espn("basketball", "wnba"),
        teams: &[("Las Vegas Aces", "New York Liberty"), ("Connecticut Sun", "Minnesota Lynx")],
        ..US_MAJOR
    },
    LeagueConfig {
        key: "NCAAB",
        name: "NCAA Men's Basketball",
        flag: "🏀",
        source: espn("basketball", "mens-college-basketball"),
        teams: &[("Duke", "North Carolina"), ("Kansas", "Kentucky"), ("UConn", "Villanova")],
        score_band: NARROW_BAND,
        ..US_MAJOR
    },
    LeagueConfig {
        key: "EUROLEAGUE",
        name: "EuroLeague Basketball",
        flag: "🏀",
        teams: &[("Real Madrid", "Panathinaikos"), ("Fenerbahce", "Olympiacos")],
        score_band: NARROW_BAND,
        ..US_MAJOR
    },
    LeagueConfig {
        key: "NFL",
        name: "National Football League",
        flag: "🏈",
        sport: Sport::AmericanFootball,
        source: espn("football", "nfl"),
        teams: &[
            ("Kansas City Chiefs", "Buffalo Bills"),
            ("Dallas Cowboys", "Philadelphia Eagles"),
            ("San Francisco 49ers", "Detroit Lions"),
        ],
        rules: NFL_RULES,
        ..US_MAJOR
    },
    LeagueConfig {
        key: "NCAAF",
        name: "NCAA Football",
        flag: "🏈",
        sport: Sport::AmericanFootball,
        source: espn("football", "college-football"),
        teams: &[("Alabama", "Georgia"), ("Ohio State", "Michigan"), ("Texas", "Oklahoma")],
        score_band: NARROW_BAND,
        ..US_MAJOR
    },
    LeagueConfig {
        key: "NHL",
        name: "National Hockey League",
        flag: "🏒",
        sport: Sport::IceHockey,
        source: espn("hockey", "nhl"),
        teams: &[
            ("Edmonton Oilers", "Florida Panthers"),
            ("Toronto Maple Leafs", "Montreal Canadiens"),
            ("New York Rangers", "Boston Bruins"),
        ],
        ..US_MAJOR
    },
    LeagueConfig {
        key: "KHL",
        name: "Kontinental Hockey League",
        flag: "🏒",
        sport: Sport::IceHockey,
        teams: &[("CSKA Moscow", "SKA Saint Petersburg"), ("Ak Bars Kazan", "Metallurg Magnitogorsk")],
        ..OTHER
    },
    LeagueConfig {
        key: "MLB",
        name: "Major League Baseball",
        flag: "⚾",
        sport: Sport::Baseball,
        source: espn("baseball", "mlb"),
        teams: &[
            ("New York Yankees", "Boston Red Sox"),
            ("Los Angeles Dodgers", "San Francisco Giants"),
            ("Houston Astros", "Texas Rangers"),
        ],
        ..US_MAJOR
    },
    LeagueConfig {
        key: "ATP",
        name: "ATP Tour",
        source: espn("tennis", "atp"),
        teams: &[
            ("Jannik Sinner", "Carlos Alcaraz"),
            ("Novak Djokovic", "Alexander Zverev"),
            ("Daniil Medvedev", "Taylor Fritz"),
        ],
        rules: TENNIS_RULES,
        ..INDIVIDUAL
    },
    LeagueConfig {
        key: "WTA",
        name: "WTA Tour",
        source: espn("tennis", "wta"),
        teams: &[
            ("Aryna Sabalenka", "Iga Swiatek"),
            ("Coco Gauff", "Elena Rybakina"),
            ("Jessica Pegula", "Jasmine Paolini"),
        ],
        ..INDIVIDUAL
    },
    LeagueConfig {
        key: "UFC",
        name: "Ultimate Fighting Championship",
        flag: "🥊",
        sport: Sport::Mma,
        source: espn("mma", "ufc"),
        teams: &[("Islam Makhachev", "Arman Tsarukyan"), ("Alex Pereira", "Magomed Ankalaev")],
        ..INDIVIDUAL
    },
    LeagueConfig {
        key: "IPL",
        name: "Indian Premier League",
        flag: "🏏",
        sport: Sport::Cricket,
        teams: &[
            ("Mumbai Indians", "Chennai Super Kings"),
            ("Royal Challengers Bengaluru", "Kolkata Knight Riders"),
        ],
        ..OTHER
    },
    LeagueConfig {
        key: "NRL",
        name: "National Rugby League",
        flag: "🏉",
        sport: Sport::Rugby,
        teams: &[("Penrith Panthers", "Melbourne Storm"), ("Brisbane Broncos", "Sydney Roosters")],
        ..OTHER
    },
    LeagueConfig {
        key: "SUPER_RUGBY",
        name: "Super Rugby Pacific",
        flag: "🏉",
        sport: Sport::Rugby,
        teams: &[("Crusaders", "Blues"), ("Chiefs", "Hurricanes")],
        ..OTHER
    },
];

/// Alias → canonical key. Aliases are normalized on load.
pub const ALIASES: &[(&str, &str)] = &[
    ("EPL", "PREMIER_LEAGUE"),
    ("ENGLAND", "PREMIER_LEAGUE"),
    ("LALIGA", "LA_LIGA"),
    ("SPAIN", "LA_LIGA"),
    ("SERIEA", "SERIE_A"),
    ("ITALY", "SERIE_A"),
    ("GERMANY", "BUNDESLIGA"),
    ("LIGUE1", "LIGUE_1"),
    ("FRANCE", "LIGUE_1"),
    ("UCL", "UEFA"),
    ("CHAMPIONS_LEAGUE", "UEFA"),
    ("UEL", "EUROPA_LEAGUE"),
    ("EFL", "CHAMPIONSHIP"),
    ("NETHERLANDS", "EREDIVISIE"),
    ("PORTUGAL", "PRIMEIRA_LIGA"),
    ("SPFL", "SCOTTISH_PREMIERSHIP"),
    ("USA_MLS", "MLS"),
    ("LIGAMX", "LIGA_MX"),
    ("MEXICO", "LIGA_MX"),
    ("BRAZIL", "BRASILEIRAO"),
    ("ARGENTINA", "ARGENTINA_PRIMERA"),
    ("ALEAGUE", "A_LEAGUE"),
    ("AUSTRALIA_A_LEAGUE", "A_LEAGUE"),
    ("J1", "J_LEAGUE"),
    ("SPL", "SAUDI_PRO_LEAGUE"),
    ("COLLEGE_BASKETBALL", "NCAAB"),
    ("COLLEGE_FOOTBALL", "NCAAF"),
    ("TENNIS", "ATP"),
    ("MMA", "UFC"),
    ("CRICKET", "IPL"),
];
