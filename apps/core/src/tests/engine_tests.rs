//! Engine Scenario Tests
//!
//! Whole conversations driven through `Engine::respond` with a manual clock
//! and fixed entropy, so every reply is reproducible.

use crate::brain::{Directive, Engine, Intent, LineKind, Mode, Reply, Source, Topic};
use crate::clock::ManualClock;
use crate::content::Content;
use crate::entropy::FixedEntropy;

fn engine_with(content: Content, entropy: u32) -> Engine {
    Engine::with_collaborators(
        content,
        Box::new(ManualClock::new()),
        Box::new(FixedEntropy(entropy)),
    )
}

fn engine() -> Engine {
    engine_with(Content::builtin(), 0)
}

fn say(engine: &mut Engine, input: &str) -> Reply {
    engine.respond(input).into_reply()
}

/// Rendered main response line.
fn rendered(reply: &Reply) -> String {
    reply
        .render()
        .into_iter()
        .find(|(kind, _)| *kind == LineKind::Response)
        .map(|(_, text)| text)
        .unwrap_or_default()
}

fn filler(engine: &mut Engine, turns: usize) {
    for _ in 0..turns {
        say(engine, "zzzz qqqq");
    }
}

#[cfg(test)]
mod intent_tests {
    use super::*;

    #[test]
    fn test_question_mark_anywhere_wins() {
        let mut engine = engine();
        say(&mut engine, "hello there?");
        assert_eq!(engine.state().last_intent, Intent::Question);

        say(&mut engine, "tell me, really?");
        assert_eq!(engine.state().last_intent, Intent::Question);
    }

    #[test]
    fn test_first_word_classification() {
        let mut engine = engine();
        say(&mut engine, "hey you");
        assert_eq!(engine.state().last_intent, Intent::Greeting);
        say(&mut engine, "explain yourself");
        assert_eq!(engine.state().last_intent, Intent::Request);
        say(&mut engine, "zzzz qqqq");
        assert_eq!(engine.state().last_intent, Intent::Statement);
    }
}

#[cfg(test)]
mod keyword_tests {
    use super::*;

    fn keyword(pattern: &str, target: &str) -> Source {
        Source::Keyword {
            pattern: pattern.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn test_tie_goes_to_later_entry() {
        let mut engine = engine();
        let reply = say(&mut engine, "my robot has a disk");
        assert_eq!(reply.source, keyword("disk", "disk"));

        let mut content = Content::builtin();
        content.keywords.reverse();
        let mut engine = engine_with(content, 0);
        let reply = say(&mut engine, "my robot has a disk");
        assert_eq!(reply.source, keyword("robot", "robot"));
    }

    #[test]
    fn test_topic_continuity_breaks_tie() {
        let mut engine = engine();
        say(&mut engine, "i love sprites");
        assert_eq!(engine.state().last_topic, Topic::Hardware);

        let reply = say(&mut engine, "that disk is funny");
        assert_eq!(reply.source, keyword("disk", "disk"));
    }

    #[test]
    fn test_mode_bonus_breaks_tie() {
        let mut engine = engine();
        let reply = say(&mut engine, "that disk is funny");
        assert_eq!(reply.source, keyword("funny", "funny"));

        let mut engine = self::engine();
        say(&mut engine, "be technical");
        let reply = say(&mut engine, "that disk is funny");
        assert_eq!(reply.source, keyword("disk", "disk"));
    }

    #[test]
    fn test_negated_keyword_is_skipped() {
        let mut engine = engine();
        let negated = say(&mut engine, "I don't like sprites");
        assert!(matches!(negated.source, Source::Generic { .. }));

        let plain = say(&mut engine, "I love sprites");
        assert_eq!(plain.source, keyword("sprite", "sprites"));
        assert_eq!(engine.state().last_topic, Topic::Hardware);
    }

    #[test]
    fn test_no_match_leaves_topic_alone() {
        let mut engine = engine();
        say(&mut engine, "i love sprites");
        say(&mut engine, "zzzz qqqq");
        assert_eq!(engine.state().last_topic, Topic::Hardware);
    }
}

#[cfg(test)]
mod pool_tests {
    use super::*;

    #[test]
    fn test_normal_mode_cycles_variants() {
        let mut engine = engine();
        let picks: Vec<String> = (0..4)
            .map(|_| say(&mut engine, "hello").response().to_string())
            .collect();
        let variants = &engine.content().pool("greeting").unwrap().variants;

        assert_eq!(picks[0], variants[0]);
        assert_eq!(picks[1], variants[1]);
        assert_eq!(picks[2], variants[2]);
        assert_eq!(picks[3], variants[0]);
    }

    #[test]
    fn test_concise_mode_pins_first_variant() {
        let mut engine = engine();
        say(&mut engine, "be brief");
        assert_eq!(say(&mut engine, "hello").response(), "Hello!");
        assert_eq!(say(&mut engine, "hello").response(), "Hello!");
        assert_eq!(engine.pool("greeting").unwrap().cursor(), 0);
    }

    #[test]
    fn test_playful_mode_pins_last_variant() {
        let mut engine = engine();
        say(&mut engine, "be playful");
        let reply = say(&mut engine, "hello");
        assert_eq!(rendered(&reply), "Well hello hello! Ready to chat, friend?");
    }
}

#[cfg(test)]
mod generic_tests {
    use super::*;

    #[test]
    fn test_word_echo_in_generic_reply() {
        let mut engine = engine_with(Content::builtin(), 3);
        let reply = say(&mut engine, "zebras are weird");
        assert_eq!(reply.source, Source::Generic { index: 3 });
        assert_eq!(rendered(&reply), "What makes you say zebras?");
    }

    #[test]
    fn test_counter_advances_only_on_generic_replies() {
        let mut engine = engine();
        say(&mut engine, "zzzz qqqq");
        say(&mut engine, "i love sprites");
        say(&mut engine, "be brief");
        assert_eq!(engine.state().response_counter, 1);
    }
}

#[cfg(test)]
mod directive_tests {
    use super::*;

    #[test]
    fn test_mode_switch_sets_flag_and_acks() {
        let mut engine = engine();
        let reply = say(&mut engine, "Please be concise");
        assert!(reply.flags.mode_changed);
        assert_eq!(reply.source, Source::Directive(Directive::ModeSwitch));
        assert_eq!(reply.response(), engine.content().mode_acks.concise);
        assert_eq!(engine.state().mode, Mode::Concise);
    }

    #[test]
    fn test_followup_question_then_yes() {
        let mut engine = engine();
        let reply = say(&mut engine, "i like music");
        assert!(reply.flags.forced_followup);
        assert_eq!(
            reply.line(LineKind::Followup),
            engine.content().followup_for("music")
        );
        assert_eq!(engine.state().last_intent, Intent::Followup);

        let reply = say(&mut engine, "yes");
        assert_eq!(reply.source, Source::Directive(Directive::Followup));
        assert_eq!(reply.response(), engine.content().continuation_yes);
        assert_eq!(engine.state().last_intent, Intent::Statement);
    }

    #[test]
    fn test_followup_question_then_no() {
        let mut engine = engine();
        say(&mut engine, "i like books");
        let reply = say(&mut engine, "no");
        assert_eq!(reply.response(), engine.content().continuation_no);
    }

    #[test]
    fn test_short_unrelated_answer_clears_followup() {
        let mut engine = engine();
        say(&mut engine, "i like games");
        let reply = say(&mut engine, "hmm");
        assert!(matches!(reply.source, Source::Generic { .. }));
        assert_eq!(engine.state().last_intent, Intent::Statement);
    }

    #[test]
    fn test_depth_request_uses_last_topic() {
        let mut engine = engine();
        say(&mut engine, "i love sprites");
        let reply = say(&mut engine, "tell me more");
        assert_eq!(reply.response(), engine.content().deeper_for(Topic::Hardware));
    }

    #[test]
    fn test_stats_boundaries() {
        let mut engine = engine();
        filler(&mut engine, 4);
        assert_eq!(
            say(&mut engine, "how many turns").response(),
            "We've had 4 exchanges so far! We're just getting started."
        );

        let mut engine = self::engine();
        filler(&mut engine, 5);
        assert_eq!(
            say(&mut engine, "stats").response(),
            "We've had 5 exchanges so far!"
        );

        let mut engine = self::engine();
        filler(&mut engine, 20);
        assert_eq!(
            say(&mut engine, "how long have we been talking").response(),
            "We've had 20 exchanges so far! Quite the conversation!"
        );
    }

    #[test]
    fn test_name_round_trip() {
        let mut engine = engine();
        let before = say(&mut engine, "what is my name");
        assert_eq!(rendered(&before), "You're friend, of course!");

        let learned = say(&mut engine, "my name is ana");
        assert!(learned.flags.name_just_learned);
        assert_eq!(learned.response(), "Nice to meet you, Ana! I'll remember that.");

        let after = say(&mut engine, "what is my name");
        assert_eq!(rendered(&after), "You're Ana, of course!");
    }

    #[test]
    fn test_date_round_trip() {
        let mut engine = engine();
        let set = say(&mut engine, "today is February 7 2026");
        assert_eq!(set.response(), "Date set to February 7, 2026!");

        let read = say(&mut engine, "what day is it");
        assert_eq!(read.source, Source::Directive(Directive::DateTime));
        assert!(read.response().contains("February 7, 2026"));
    }
}

#[cfg(test)]
mod orchestrator_tests {
    use super::*;

    #[test]
    fn test_time_of_day_salutation_on_greetings() {
        let mut engine = engine();
        assert_eq!(say(&mut engine, "hello").response(), "Hello!");

        let cases = [
            ("the time is 8:15 am", "Good morning! "),
            ("the time is 2:30 pm", "Good afternoon! "),
            ("the time is 21:00", "Good evening! "),
        ];
        for (set, salutation) in cases {
            let mut engine = self::engine();
            say(&mut engine, set);
            let reply = say(&mut engine, "hello");
            assert_eq!(reply.response(), format!("{}Hello!", salutation), "after '{}'", set);
        }
    }

    #[test]
    fn test_salutation_only_on_greeting_pool() {
        let mut engine = engine();
        say(&mut engine, "the time is 8:15 am");
        let reply = say(&mut engine, "tell me a joke");
        assert!(!reply.response().starts_with("Good morning"));
    }

    #[test]
    fn test_milestones_fire_exactly_once() {
        let mut engine = engine();
        let mut fired = Vec::new();
        for turn in 0..25 {
            let reply = say(&mut engine, "zzzz qqqq");
            if reply.line(LineKind::Milestone).is_some() {
                fired.push(turn);
            }
        }
        assert_eq!(fired, vec![5, 10, 20]);
    }

    #[test]
    fn test_aside_on_every_third_inquisitive_turn() {
        let mut engine = engine();
        let first = say(&mut engine, "why qqqq");
        assert_eq!(first.line(LineKind::Aside), None);

        filler(&mut engine, 2);
        let third = say(&mut engine, "why qqqq");
        assert_eq!(third.line(LineKind::Aside), Some("I like how curious you are."));

        filler(&mut engine, 2);
        let statement = say(&mut engine, "zzzz qqqq");
        assert_eq!(statement.line(LineKind::Aside), None);
    }

    #[test]
    fn test_directive_replies_get_asides_too() {
        let mut engine = engine();
        filler(&mut engine, 3);
        let reply = say(&mut engine, "how many turns");
        assert_eq!(reply.source, Source::Directive(Directive::Stats));
        assert_eq!(reply.line(LineKind::Aside), Some("I like how curious you are."));
    }

    #[test]
    fn test_turn_count_advances_on_every_reply() {
        let mut engine = engine();
        say(&mut engine, "be brief");
        say(&mut engine, "my name is ana");
        say(&mut engine, "the time is 7:44 pm");
        say(&mut engine, "zzzz qqqq");
        assert_eq!(engine.state().turn_count, 4);
    }
}
