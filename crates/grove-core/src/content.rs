//! The built-in "Whispering Grove" narrative arc.
//!
//! A compact world with a few scenes and choices forming a mini-arc. Hosts
//! that want their own content supply a JSON definition instead (see
//! [`SceneGraph::from_json`]).

use crate::graph::SceneGraph;
use crate::scene::{Choice, Effect, Scene};

/// Build the Whispering Grove scene graph. Entry scene: `intro`.
pub fn whispering_grove() -> SceneGraph {
    let scenes = vec![
        Scene::new(
            "intro",
            "The Whispering Grove",
            "Your eyes snap open beneath a canopy of towering pines. Moonlight filters \
             through the branches like cold fire. The forest is deathly still… except for \
             one thing: every tree around you whispers your name. Ahead lies a narrow \
             trail, fading into blue mist. To your left, a toppled stone monolith glows \
             faintly with runes. To your right, a lantern flickers near an abandoned \
             ranger’s camp.",
        )
        .with_choice(Choice::new(
            "follow_trail",
            "Walk toward the misty forest trail.",
            "trail",
        ))
        .with_choice(Choice::new(
            "inspect_monolith",
            "Approach the glowing stone monolith.",
            "monolith",
        ))
        .with_choice(Choice::new(
            "check_camp",
            "Investigate the ranger’s camp.",
            "camp",
        )),
        Scene::new(
            "trail",
            "The Fading Path",
            "The path twists through trees that lean closer with each step. The whispers \
             grow louder—almost urgent. A shape darts across the trail: a small fox with \
             silver eyes, staring at you knowingly. A wooden charm dangles from its mouth.",
        )
        .with_choice(Choice::new(
            "follow_fox",
            "Go after the strange fox.",
            "fox_chase",
        ))
        .with_choice(Choice::new(
            "ignore_and_continue",
            "Stay on the path and press forward.",
            "clearing",
        ))
        .with_choice(Choice::new(
            "turn_back",
            "Retreat to the forest entrance.",
            "intro",
        )),
        Scene::new(
            "monolith",
            "The Stone of Tethers",
            "The monolith rises before you, carved with spiraling runes that glow \
             moss-green. As you touch it, the whispers fall silent. A single rune \
             brightens, forming a symbol resembling an eye. A pulse of energy hums \
             beneath your fingertips.",
        )
        .with_choice(Choice::new(
            "touch_symbol",
            "Press your hand firmly on the glowing rune.",
            "vision",
        ))
        .with_choice(Choice::new(
            "search_around",
            "Examine the ground around the monolith.",
            "buried_relic",
        ))
        .with_choice(Choice::new(
            "step_back",
            "Back away—it feels dangerous.",
            "intro",
        )),
        Scene::new(
            "camp",
            "The Abandoned Camp",
            "The ranger’s camp sits in eerie silence. A pot of stew still simmers over \
             dying coals—recently abandoned. A journal lies open on a log, pages \
             fluttering in the breeze. Something moves inside the tent.",
        )
        .with_choice(Choice::new(
            "read_journal",
            "Examine the ranger’s journal.",
            "journal_entry",
        ))
        .with_choice(Choice::new("open_tent", "Look inside the tent.", "tent_creature"))
        .with_choice(
            Choice::new("grab_lantern", "Take the lantern and leave.", "intro")
                .with_effect(Effect::AppendInventory("lantern".to_string())),
        ),
        Scene::new(
            "fox_chase",
            "The Silver Fox",
            "The fox leads you through a twisting hollow of roots before stopping beside \
             an ancient stump. It drops the charm—a carved wooden disc—at your feet. A \
             faint blue flame flickers inside the stump.",
        )
        .with_choice(
            Choice::new("take_charm", "Pick up the wooden charm.", "charm_taken")
                .with_effect(Effect::AppendInventory("forest_charm".to_string()))
                .with_effect(Effect::AppendJournal(
                    "A silver-eyed fox gifted you a charm.".to_string(),
                )),
        )
        .with_choice(Choice::new(
            "inspect_stump",
            "Peer into the stump and its eerie flame.",
            "spirit_fire",
        ))
        .with_choice(Choice::new(
            "shoo_fox",
            "Chase the fox away and leave.",
            "intro",
        )),
        Scene::new(
            "charm_taken",
            "The Charm Accepted",
            "The disc warms in your palm, its carved rings turning slowly like a compass \
             finding north. The fox bows its head once and melts into the undergrowth. \
             The whispers soften, as if satisfied.",
        )
        .with_choice(Choice::new(
            "press_on",
            "Continue deeper along the hollow.",
            "clearing",
        ))
        .with_choice(Choice::new(
            "head_back",
            "Return to the forest entrance.",
            "intro",
        )),
        Scene::new(
            "clearing",
            "Moonlit Clearing",
            "The trees part, revealing a circular clearing bathed in moonlight. In the \
             center stands a stone altar covered in vines. A soft heartbeat-like thrum \
             pulses beneath the ground.",
        )
        .with_choice(Choice::new("approach_altar", "Walk toward the altar.", "altar"))
        .with_choice(Choice::new(
            "inspect_ground",
            "Search the soil for signs of disturbance.",
            "roots",
        ))
        .with_choice(Choice::new("backtrack", "Return the way you came.", "trail")),
        Scene::new(
            "roots",
            "Beneath the Soil",
            "You brush the loam aside. Pale roots knit together in a slow pulse, all \
             bending toward the altar like veins toward a missing heart. Where they \
             cross, the ground is warm.",
        )
        .with_choice(Choice::new(
            "follow_roots",
            "Trace the roots toward the altar.",
            "altar",
        ))
        .with_choice(Choice::new(
            "stand_up",
            "Stand and take in the clearing.",
            "clearing",
        )),
        Scene::new(
            "vision",
            "A Glimpse Beyond",
            "Your mind fills with blinding green light. Images flash—an ancient forest \
             god bound beneath the Grove, its heart stolen by those sworn to protect it. \
             A final whisper: “Restore me… or lose yourselves to the silence.”",
        )
        .with_choice(
            Choice::new(
                "accept_quest",
                "Vow to restore the forest god’s heart.",
                "quest_start",
            )
            .with_effect(Effect::AppendJournal(
                "You accepted the god’s silent plea.".to_string(),
            )),
        )
        .with_choice(Choice::new(
            "reject_vision",
            "Pull away and reject the calling.",
            "intro",
        )),
        Scene::new(
            "buried_relic",
            "Something Buried",
            "You uncover a small stone box engraved with vines. Inside lies a bone-white \
             key that hums with faint life. The forest seems to hold its breath.",
        )
        .with_choice(
            Choice::new("take_key", "Claim the strange key.", "intro")
                .with_effect(Effect::AppendInventory("white_key".to_string()))
                .with_effect(Effect::AppendJournal(
                    "You unearthed a living key beneath the monolith.".to_string(),
                )),
        )
        .with_choice(Choice::new(
            "leave_relic",
            "You’re not touching that.",
            "intro",
        )),
        Scene::new(
            "journal_entry",
            "The Ranger’s Notes",
            "The journal describes disappearing villagers, strange lights, and whispers \
             leading wanderers into the Grove. Its final line reads: “If you hear your \
             name… run.”",
        )
        .with_choice(Choice::new(
            "investigate_more",
            "Keep reading deeper into the journal.",
            "journal_secret",
        ))
        .with_choice(Choice::new(
            "close_journal",
            "Return to the forest entrance.",
            "intro",
        )),
        Scene::new(
            "journal_secret",
            "The Hidden Page",
            "Between the last pages, a folded sheet in different ink: a rough map of the \
             Grove with a hollow tree circled three times, and one word underneath — \
             “heart”.",
        )
        .with_choice(
            Choice::new("take_map", "Pocket the ranger’s map.", "camp")
                .with_effect(Effect::AppendInventory("ranger_map".to_string()))
                .with_effect(Effect::AppendJournal(
                    "The ranger marked a hollow tree: the heart lies there.".to_string(),
                )),
        )
        .with_choice(Choice::new(
            "put_back",
            "Leave the journal as you found it.",
            "camp",
        )),
        Scene::new(
            "tent_creature",
            "Not Alone",
            "Inside the tent, something crouches in the shadows. As your eyes adjust, you \
             see it—a pale, bark-skinned creature with hollow eyes. It watches you \
             silently.",
        )
        .with_choice(Choice::new(
            "speak",
            "Try talking to the creature.",
            "creature_talk",
        ))
        .with_choice(Choice::new("attack", "Strike before it does.", "creature_fight"))
        .with_choice(Choice::new("back_out", "Retreat slowly.", "intro")),
        Scene::new(
            "creature_fight",
            "The Forest's Wrath",
            "The creature screeches and leaps. After a fierce struggle, it collapses. \
             Something clatters from its body—a pinecone-shaped amulet glowing faint \
             green.",
        )
        .with_choice(
            Choice::new("take_amulet", "Pick up the forest amulet.", "quest_start")
                .with_effect(Effect::AppendInventory("forest_amulet".to_string()))
                .with_effect(Effect::AppendJournal(
                    "Recovered an amulet from a forest spawn.".to_string(),
                )),
        )
        .with_choice(Choice::new("leave_it", "Walk away, shaken.", "intro")),
        Scene::new(
            "creature_talk",
            "A Fragile Voice",
            "The creature whispers with a trembling voice: “The heart… stolen… find the \
             Hollow Tree…” Before you can ask more, it disintegrates into drifting \
             leaves.",
        )
        .with_choice(Choice::new(
            "seek_hollow_tree",
            "Begin the search for the Hollow Tree.",
            "quest_start",
        ))
        .with_choice(Choice::new(
            "return_to_entrance",
            "This is too much—go back.",
            "intro",
        )),
        Scene::new(
            "spirit_fire",
            "The Flame’s Secret",
            "The blue flame rises, forming the face of an ancient spirit. It asks: “Child \
             of the wandering path… do you carry truth or hunger?”",
        )
        .with_choice(Choice::new(
            "answer_truth",
            "Speak honestly of why you’re here.",
            "blessing",
        ))
        .with_choice(Choice::new("stay_silent", "Say nothing.", "curse"))
        .with_choice(Choice::new("run", "Flee from the stump.", "intro")),
        Scene::new(
            "blessing",
            "The Spirit’s Favor",
            "The flame settles into a steady glow. “Truth, then. Carry it to the altar.” \
             Warmth sinks into your chest, and for a moment the whispers sound almost \
             kind.",
        )
        .with_choice(
            Choice::new("accept_blessing", "Bow your head and accept.", "clearing")
                .with_effect(Effect::AppendJournal(
                    "A fire spirit blessed your errand.".to_string(),
                )),
        )
        .with_choice(Choice::new(
            "leave_stump",
            "Step away from the stump.",
            "intro",
        )),
        Scene::new(
            "curse",
            "The Spirit’s Displeasure",
            "The flame gutters violet. “Silence is its own answer.” Cold threads coil up \
             your arms and the whispers sharpen, repeating your name with an edge.",
        )
        .with_choice(
            Choice::new("shake_it_off", "Shake off the chill and retreat.", "intro")
                .with_effect(Effect::AppendJournal(
                    "A fire spirit marked you for your silence.".to_string(),
                )),
        ),
        Scene::new(
            "altar",
            "The Heartless Altar",
            "The altar’s vines writhe faintly. A hollow depression marks its center—\
             something once rested there. A pulse of sorrow radiates into your chest.",
        )
        .with_choice(Choice::new(
            "place_charm",
            "Place any charm or amulet you have into the hollow.",
            "heart_response",
        ))
        .with_choice(Choice::new(
            "touch_vines",
            "Lay your hand upon the vines.",
            "vine_vision",
        ))
        .with_choice(Choice::new("back_away", "Step out of the clearing.", "trail")),
        Scene::new(
            "heart_response",
            "An Answering Pulse",
            "The hollow accepts the offering with a sound like a held breath released. \
             The thrum beneath the clearing quickens — not restored, but listening. \
             Somewhere deeper in the Grove, wood creaks open.",
        )
        .with_choice(Choice::new(
            "follow_sound",
            "Follow the creaking into the deep forest.",
            "quest_start",
        ))
        .with_choice(Choice::new(
            "step_away",
            "Step back from the altar.",
            "clearing",
        )),
        Scene::new(
            "vine_vision",
            "Memory of the Vines",
            "The vines tighten gently around your wrist and show you a procession: \
             rangers in grey cloaks carrying a casket of living wood away from the altar, \
             toward a hollow tree split by lightning.",
        )
        .with_choice(
            Choice::new("commit_vision", "Fix the procession’s path in your mind.", "clearing")
                .with_effect(Effect::AppendJournal(
                    "Grey-cloaked rangers carried the heart toward a hollow tree.".to_string(),
                )),
        )
        .with_choice(Choice::new(
            "pull_away",
            "Pull your hand free.",
            "altar",
        )),
        Scene::new(
            "quest_start",
            "The God’s Whisper",
            "Something shifts in the Grove. The air warms. A deep voice echoes: “Find my \
             heart in the Hollow Tree. Restore the Grove, and I shall restore you.”",
        )
        .with_choice(Choice::new(
            "begin_journey",
            "Head into the deeper forest.",
            "intro",
        ))
        .with_choice(Choice::new(
            "end_session",
            "Rest here and end the session.",
            "intro",
        )),
    ];

    SceneGraph::load("intro", scenes).expect("built-in content must validate")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CLOSING_PROMPT;
    use crate::scene::Effect;

    #[test]
    fn builtin_world_loads() {
        let graph = whispering_grove();
        assert_eq!(graph.entry().as_str(), "intro");
        assert!(graph.scene_count() >= 15);
    }

    #[test]
    fn lantern_effect_present() {
        let graph = whispering_grove();
        let camp = graph.get(&"camp".into()).unwrap();
        let grab = camp.choice(&"grab_lantern".into()).unwrap();

        assert_eq!(grab.target.as_str(), "intro");
        assert_eq!(
            grab.effects,
            vec![Effect::AppendInventory("lantern".to_string())]
        );
    }

    #[test]
    fn intro_choices_in_declared_order() {
        let graph = whispering_grove();
        let intro = graph.get(&"intro".into()).unwrap();
        let ids: Vec<&str> = intro.choices.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["follow_trail", "inspect_monolith", "check_camp"]);
    }

    #[test]
    fn every_view_renders() {
        let graph = whispering_grove();
        let ids: Vec<_> = graph.scenes().map(|s| s.id.clone()).collect();
        for id in ids {
            let view = graph.describe(&id);
            assert!(view.ends_with(CLOSING_PROMPT), "bad view for {id}");
            assert!(!view.contains("featureless void"), "fallback for {id}");
        }
    }

    #[test]
    fn builtin_world_json_roundtrip() {
        let graph = whispering_grove();
        let json = graph.to_json().unwrap();
        let back = SceneGraph::from_json(&json).unwrap();
        assert_eq!(back.scene_count(), graph.scene_count());
        assert_eq!(back.choice_count(), graph.choice_count());
    }
}
