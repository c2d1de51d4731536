//! User-facing strings in English and French.

use bechdel_core::types::Language;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Every string the CLI prints, for one language.
///
/// Templates use `{name}` placeholders, filled by [`interpolate`].
#[derive(Debug)]
pub struct Catalog {
    pub yes: &'static str,
    pub nope: &'static str,
    pub did_you_mean: &'static str,
    pub movie_title: &'static str,
    pub see_more: &'static str,
    pub not_found: &'static str,
    pub generic_error: &'static str,
    pub pass_texts: &'static [&'static str],
    pub fail_texts: &'static [&'static str],
}

impl Catalog {
    pub fn for_language(language: Language) -> &'static Catalog {
        match language {
            Language::En => &EN,
            Language::Fr => &FR,
        }
    }
}

/// `{name}` placeholder; names are ASCII word characters.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("valid placeholder pattern"));

/// Replaces each `{name}` with its value from `vars`.
///
/// Unknown names become empty; braces not around a word are kept as is.
/// Values are inserted literally.
pub fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            vars.iter()
                .find(|(key, _)| *key == &caps[1])
                .map_or("", |(_, value)| *value)
        })
        .into_owned()
}

static EN: Catalog = Catalog {
    yes: "Yes!",
    nope: "Nope",
    did_you_mean: "Did you mean \"{title} ({year})\"?",
    movie_title: "{title} ({year})",
    see_more: "See more on BechdelTest.com \u{2192}",
    not_found: "Couldn\u{2019}t find \u{201c}{query}\u{201d} in our database. Try the full title \u{2014} we have ~10,700 movies from 1874\u{2013}2026.",
    generic_error: "Something went wrong. Please try again.",
    pass_texts: &[
        "Women talked to each other about something other than a man. The bar is low and yet.",
        "Women had a whole conversation without mentioning a single dude. Revolutionary, apparently.",
        "The women in this film acknowledged each other\u{2019}s existence. Cinema is healing.",
        "Two women spoke and the world didn\u{2019}t end. Take notes, Hollywood.",
        "Women talking to women about not-men. Groundbreaking. Literally groundbreaking.",
        "The girls are girlbossing, the plot is plotting, and men are simply not involved.",
        "Proof that women can in fact carry a conversation without a man. Shocking, we know.",
        "The women had things to say to each other. And none of it was about Greg.",
        "Somewhere, a woman talked to another woman about literally anything else. We won.",
        "Women existing beyond the male gaze? In THIS economy? Love that for them.",
        "Two named women. One conversation. Zero men mentioned. That\u{2019}s cinema, baby.",
        "The bare minimum was met and honestly? We\u{2019}re celebrating.",
        "Women spoke to each other like real humans do. The representation we deserve.",
        "Not a single \u{2018}but what does he think?\u{2019} in sight. A masterpiece of dialogue.",
        "The women in this movie passed the vibe check AND the Bechdel Test.",
        "Women having conversations about stuff that matters to them. Wild concept, huge if true.",
    ],
    fail_texts: &[
        "Unfortunately the women were busy existing around men.",
        "The women simply did not have time for each other. Too many men to orbit, apparently.",
        "Shockingly, the women forgot to talk to each other. Must\u{2019}ve been busy being plot devices.",
        "The girlies never got their moment. Hollywood said \u{2018}not today.\u{2019}",
        "Two women could have had a chat. The writers said absolutely not.",
        "The women were there. They just\u{2026} never spoke. Like decorative houseplants.",
        "Zero woman-to-woman conversations detected. The algorithm is disappointed.",
        "The women\u{2019}s dialogue budget was apparently spent on the men. Classic.",
        "Another film where women exist exclusively in relation to men. Groundbreaking.",
        "The women were present but narratively invisible. A tale as old as cinema.",
        "She was there. She was named. She just never talked to another her.",
        "The script really said \u{2018}women talking to women? Not on my watch.\u{2019}",
        "Turns out the women had nothing to say to each other. Or weren\u{2019}t allowed to.",
        "The women in this film communicated exclusively through men. Very carrier pigeon of them.",
        "No woman-to-woman dialogue found. The bar was underground and they brought a shovel.",
        "Hollywood once again confirming that women only exist when men are watching.",
    ],
};

static FR: Catalog = Catalog {
    yes: "Oui\u{a0}!",
    nope: "Non",
    did_you_mean: "Vous cherchiez \u{ab}\u{a0}{title} ({year})\u{a0}\u{bb}\u{a0}?",
    movie_title: "{title} ({year})",
    see_more: "Voir plus sur BechdelTest.com \u{2192}",
    not_found: "Impossible de trouver \u{ab}\u{a0}{query}\u{a0}\u{bb} dans notre base. Essayez le titre complet \u{2014} nous avons environ 10\u{a0}700 films de 1874 \u{e0} 2026.",
    generic_error: "Quelque chose s\u{2019}est mal pass\u{e9}. Veuillez r\u{e9}essayer.",
    pass_texts: &[
        "Des femmes se sont parl\u{e9} d\u{2019}autre chose que d\u{2019}un homme. La barre est basse, et pourtant.",
        "Des femmes ont eu une vraie conversation sans mentionner un seul mec. R\u{e9}volutionnaire, apparemment.",
        "Les femmes de ce film ont reconnu l\u{2019}existence de l\u{2019}autre. Le cin\u{e9}ma gu\u{e9}rit.",
        "Deux femmes ont parl\u{e9} et le monde ne s\u{2019}est pas effondr\u{e9}. Prends des notes, Hollywood.",
        "Des femmes parlent \u{e0} des femmes de trucs sans rapport avec les hommes. R\u{e9}volutionnaire.",
        "Les filles g\u{e8}rent, l\u{2019}intrigue avance, et les hommes ne sont tout simplement pas impliqu\u{e9}s.",
        "La preuve que les femmes peuvent avoir une conversation sans un homme. Choquant, on sait.",
        "Les femmes avaient des choses \u{e0} se dire. Et aucune ne concernait Gr\u{e9}goire.",
        "Quelque part, une femme a parl\u{e9} \u{e0} une autre femme de litt\u{e9}ralement autre chose. On a gagn\u{e9}.",
        "Des femmes qui existent au-del\u{e0} du regard masculin\u{a0}? Dans CETTE \u{e9}conomie\u{a0}? On adore.",
        "Deux femmes nomm\u{e9}es. Une conversation. Z\u{e9}ro homme mentionn\u{e9}. \u{c7}a, c\u{2019}est du cin\u{e9}ma.",
        "Le strict minimum a \u{e9}t\u{e9} atteint et franchement\u{a0}? On c\u{e9}l\u{e8}bre.",
        "Des femmes se sont parl\u{e9} comme de vraies personnes. La repr\u{e9}sentation qu\u{2019}on m\u{e9}rite.",
        "Pas un seul \u{ab}\u{a0}mais qu\u{2019}est-ce qu\u{2019}il en pense\u{a0}?\u{a0}\u{bb} en vue. Un chef-d\u{2019}\u{153}uvre de dialogue.",
        "Les femmes de ce film ont pass\u{e9} le vibe check ET le test de Bechdel.",
        "Des femmes qui parlent de trucs qui comptent pour elles. Concept fou, \u{e9}norme si vrai.",
    ],
    fail_texts: &[
        "Malheureusement, les femmes \u{e9}taient trop occup\u{e9}es \u{e0} exister autour des hommes.",
        "Les femmes n\u{2019}avaient tout simplement pas le temps de se parler. Trop d\u{2019}hommes en orbite.",
        "Les femmes ont oubli\u{e9} de se parler. Elles devaient \u{ea}tre trop occup\u{e9}es \u{e0} faire de la figuration.",
        "Les filles n\u{2019}ont jamais eu leur moment. Hollywood a dit \u{ab}\u{a0}pas aujourd\u{2019}hui\u{a0}\u{bb}.",
        "Deux femmes auraient pu discuter. Les sc\u{e9}naristes ont dit absolument pas.",
        "Les femmes \u{e9}taient l\u{e0}. Elles n\u{2019}ont juste\u{2026} jamais parl\u{e9}. Comme des plantes d\u{e9}coratives.",
        "Z\u{e9}ro conversation entre femmes d\u{e9}tect\u{e9}e. L\u{2019}algorithme est d\u{e9}\u{e7}u.",
        "Le budget de dialogues f\u{e9}minins a apparemment \u{e9}t\u{e9} d\u{e9}pens\u{e9} pour les hommes. Classique.",
        "Encore un film o\u{f9} les femmes n\u{2019}existent qu\u{2019}en relation avec les hommes. R\u{e9}volutionnaire.",
        "Les femmes \u{e9}taient pr\u{e9}sentes mais narrativement invisibles. Un classique du cin\u{e9}ma.",
        "Elle \u{e9}tait l\u{e0}. Elle avait un nom. Elle n\u{2019}a juste jamais parl\u{e9} \u{e0} une autre elle.",
        "Le sc\u{e9}nario a vraiment dit \u{ab}\u{a0}des femmes qui se parlent\u{a0}? Pas sous ma garde\u{a0}\u{bb}.",
        "Il s\u{2019}av\u{e8}re que les femmes n\u{2019}avaient rien \u{e0} se dire. Ou n\u{2019}en avaient pas le droit.",
        "Les femmes de ce film communiquaient exclusivement via les hommes. Tr\u{e8}s pigeon voyageur.",
        "Aucun dialogue entre femmes trouv\u{e9}. La barre \u{e9}tait sous terre et ils ont amen\u{e9} une pelle.",
        "Hollywood confirme une fois de plus que les femmes n\u{2019}existent que quand les hommes regardent.",
    ],
};
