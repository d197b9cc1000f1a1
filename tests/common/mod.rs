//! A small dictionary of Hawaiian sayings shared by the integration tests.

#![allow(dead_code)]

use rbmap::{OrderedMap, Saying};

/// Saying, translation, English explanation.
pub const SAYINGS: [(&str, &str, &str); 20] = [
    ("'A'ahu 'ili kao",
     "Goatskin garment.",
     "Said of one who puts on a rough outer show."),
    ("'A'ohe hana nui ke alu 'ia.",
     "No task is too big when done together.",
     "Cooperation makes any work light."),
    ("'A'ohe pau ka 'ike i ka hālau ho'okahi.",
     "Not all knowledge is learned in one school.",
     "There is always more to learn from others."),
    ("'Ike aku, 'ike mai, kōkua aku, kōkua mai.",
     "Recognize and be recognized, help and be helped.",
     "Relationships run both ways."),
    ("'O ka 'ōlelo ke ka'ā o ka mauli.",
     "Language is the fiber that binds us to our identity.",
     "A people's language carries who they are."),
    ("Aloha kekahi i kekahi.",
     "Love one another.",
     "A reminder to care for each other."),
    ("E lauhoe mai na wa'a.",
     "Everybody paddle the canoes together.",
     "Pitch in and help."),
    ("Hana ka lima, 'ai ka waha.",
     "Work with the hands, then the mouth eats.",
     "Effort comes before reward."),
    ("He ali'i ka 'āina; he kauwā ke kanaka.",
     "The land is chief; people are its servants.",
     "Care for the land and it provides."),
    ("Ho'okahi ka 'ilau like 'ana.",
     "Wield the paddles as one.",
     "Work in unison toward a goal."),
    ("I ka 'ōlelo no ke ola, i ka 'ōlelo no ka make.",
     "In words there is life, in words there is death.",
     "Speech can heal or harm."),
    ("Ka'a ka pōhaku.",
     "The stone rolls.",
     "Things are in motion."),
    ("La'i lua ke kai.",
     "The sea is very calm.",
     "Peace has settled in."),
    ("Lawe i ka ma'alea a kū'ono'ono.",
     "Take wisdom and make it deep.",
     "Learn thoroughly."),
    ("Ma ka hana ka 'ike.",
     "In working one learns.",
     "Knowledge comes through doing."),
    ("Māhanalua na kukui.",
     "The lights burn doubly warm.",
     "Said of a gathering full of warmth."),
    ("Na kai 'ewalu.",
     "The eight seas.",
     "The channels between the islands."),
    ("Nānā i ke kumu.",
     "Look to the source.",
     "Seek knowledge from its origin."),
    ("O ka pono ke hana 'ia a iho mai na lani.",
     "Continue to do good until the heavens come down to you.",
     "Blessings follow right action."),
    ("Pa'a no ka 'aihue i ka 'ole",
     "The thief is caught by what is missing.",
     "Wrongdoing reveals itself."),
];

/// Builds the dictionary, inserting the sayings in the given order.
pub fn dictionary_from<'a, I>(entries: I) -> OrderedMap<&'static str, Saying>
    where I: IntoIterator<Item=&'a (&'static str, &'static str, &'static str)> {

    let mut map = OrderedMap::new();

    for &(saying, translation, english) in entries {
        map.insert(saying, Saying::new(translation, english)).unwrap();
    }

    map
}

pub fn dictionary() -> OrderedMap<&'static str, Saying> { dictionary_from(&SAYINGS) }

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
