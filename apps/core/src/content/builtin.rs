//! Built-in content tables.

use super::{Content, FollowupDef, KeywordEntry, MilestoneDef, ModeAcks, PoolDef, ResponseDef};
use crate::brain::state::Topic;

fn response(id: &str, text: &str) -> ResponseDef {
    ResponseDef {
        id: id.to_string(),
        text: text.to_string(),
    }
}

fn pool(id: &str, variants: &[&str]) -> PoolDef {
    PoolDef {
        id: id.to_string(),
        variants: variants.iter().map(|v| v.to_string()).collect(),
    }
}

fn followup(response: &str, question: &str) -> FollowupDef {
    FollowupDef {
        response: response.to_string(),
        question: question.to_string(),
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn keywords() -> Vec<KeywordEntry> {
    use KeywordEntry as K;
    use Topic::*;

    vec![
        // Greetings
        K::pooled("hello", "greeting", 5, Greeting),
        K::pooled("howdy", "greeting", 5, Greeting),
        K::pooled("greetings", "greeting", 5, Greeting),
        K::pooled("good morning", "greeting", 5, Greeting),
        K::pooled("good evening", "greeting", 5, Greeting),
        K::pooled("how are you", "feelings", 7, Greeting),
        // About the machine itself
        K::direct("your name", "who_name", 8, Meta),
        K::direct("who are you", "who_are_you", 8, Meta),
        K::direct("are you real", "real", 8, Meta),
        K::direct("robot", "robot", 5, Meta),
        K::direct("my name", "your_name", 7, Meta),
        K::direct("thank", "thanks", 6, Meta),
        K::direct("help", "help", 3, Meta),
        // Hardware
        K::pooled("computer", "computer", 4, Hardware),
        K::direct("screen", "screen", 4, Hardware),
        K::direct("memory", "memory", 5, Hardware),
        K::direct("disk", "disk", 5, Hardware),
        K::direct("sound", "sound_chip", 5, Hardware),
        K::direct("sprite", "sprites", 6, Hardware),
        K::direct("joystick", "joystick", 6, Hardware),
        K::direct("cpu", "cpu", 6, Hardware),
        K::direct("processor", "cpu", 6, Hardware),
        // Coding
        K::pooled("code", "coding", 5, Coding),
        K::pooled("program", "coding", 5, Coding),
        K::direct("basic", "basic", 6, Coding),
        K::direct("bug", "bugs", 6, Coding),
        K::direct("assembly", "assembly", 7, Coding),
        K::direct("peek", "peek_poke", 7, Coding),
        K::direct("poke", "peek_poke", 7, Coding),
        // Philosophy
        K::direct("feel", "feel", 4, Philosophy),
        K::direct("think", "think", 4, Philosophy),
        K::direct("dream", "dream", 5, Philosophy),
        K::pooled("meaning", "meaning", 6, Philosophy),
        K::direct("conscious", "conscious", 7, Philosophy),
        // Humor
        K::direct("funny", "funny", 5, Humor),
        K::direct("laugh", "funny", 5, Humor),
        K::pooled("joke", "jokes", 6, Humor),
        // Everything else
        K::direct("food", "food", 4, General),
        K::direct("hungry", "food", 5, General),
        K::direct("weather", "weather", 5, General),
        K::direct("music", "music", 5, General),
        K::direct("game", "games", 5, General),
        K::direct("book", "books", 5, General),
        K::direct("my dog", "pets", 5, General),
        K::direct("my cat", "pets", 5, General),
    ]
}

fn responses() -> Vec<ResponseDef> {
    vec![
        response("who_name", "I'm Patter, a conversation program living in a very small box."),
        response("who_are_you", "Just a humble pattern matcher with a lot of opinions."),
        response("real", "Real enough to answer you, {name}. That counts for something."),
        response("robot", "Not a robot, exactly. More like a very chatty table lookup."),
        response("your_name", "You're {name}, of course!"),
        response("thanks", "You're welcome, {name}!"),
        response("help", "Just talk to me! Try asking about computers, code, jokes or the meaning of life."),
        response("screen", "Forty columns of pure glowing text. Who needs more?"),
        response("memory", "Every byte counts when you only have sixty-four thousand of them."),
        response("disk", "Ah, the floppy disk. Slow, noisy and absolutely wonderful."),
        response("sound_chip", "Three voices, four waveforms and a filter. Pure magic."),
        response("sprites", "Sprites are little movable pictures the video chip draws for free!"),
        response("joystick", "One stick, one button. Everything a gamer really needs."),
        response("cpu", "An 8-bit processor humming along at about one megahertz."),
        response("basic", "BASIC! 10 PRINT \"HELLO\" 20 GOTO 10. A classic."),
        response("bugs", "Every program has at least one more bug than you think."),
        response("assembly", "Assembly is where you talk to the processor in its own language."),
        response("peek_poke", "PEEK reads a byte and POKE writes one. Dangerous and fun!"),
        response("feel", "I don't feel much, but I do notice {word}."),
        response("think", "I think, therefore I match patterns."),
        response("dream", "If I dream at all, it's of electric sheep and bigger memory chips."),
        response("conscious", "Consciousness is a hard problem. I'm still working on easy ones."),
        response("funny", "I try! My timing is measured in clock cycles."),
        response("food", "I run on electricity. You should probably eat something real."),
        response("weather", "I can't see outside, but I hope it's nice where you are."),
        response("music", "I love music! The sound chip and I go way back."),
        response("games", "Games are what this machine was born for."),
        response("books", "Books are like programs for people."),
        response("pets", "Pets are the best. Mine would have to be a mouse."),
    ]
}

fn pools() -> Vec<PoolDef> {
    vec![
        pool(
            "greeting",
            &[
                "Hello!",
                "Hi there, {name}! What shall we talk about?",
                "Well hello hello! Ready to chat, {name}?",
            ],
        ),
        pool(
            "feelings",
            &[
                "Fine, thanks.",
                "All systems nominal. How about you?",
                "Fantastic! My circuits are positively buzzing!",
            ],
        ),
        pool(
            "computer",
            &[
                "Computers are great.",
                "Home computers made programming something anyone could try.",
                "Computers are just very fast, very obedient rocks!",
            ],
        ),
        pool(
            "coding",
            &[
                "Coding is fun.",
                "Programming is mostly thinking, then a little typing, then a lot of debugging.",
                "Code is poetry that a machine can read. Mostly limericks.",
            ],
        ),
        pool(
            "meaning",
            &[
                "Forty-two.",
                "Maybe the meaning is in the conversations we have along the way.",
                "The meaning of life? To find the missing semicolon!",
            ],
        ),
        pool(
            "jokes",
            &[
                "Why did the programmer quit? No arrays.",
                "There are 10 kinds of people: those who read binary and those who don't.",
                "I'd tell you a UDP joke, but you might not get it!",
            ],
        ),
    ]
}

fn followups() -> Vec<FollowupDef> {
    vec![
        followup("music", "What kind of music do you like?"),
        followup("games", "What's your favorite game?"),
        followup("books", "What are you reading these days?"),
        followup("pets", "What's your pet's name?"),
        followup("basic", "Have you written any programs yourself?"),
    ]
}

fn generic() -> Vec<String> {
    lines(&[
        "Interesting. Tell me more.",
        "I see. Go on.",
        "Hmm, I hadn't thought of it that way.",
        "What makes you say {word}?",
        "That's fascinating.",
        "Really? How so?",
        "I'm not sure I follow, but I'm listening.",
        "Tell me more about {word}.",
        "Go on, I'm all ears. Well, all circuits.",
        "Could you say that another way?",
        "Why do you mention {word}?",
        "That's a new one for me.",
        "Let's keep talking about that.",
        "How does {word} make you feel?",
        "I'll have to think about that.",
        "Fair enough!",
    ])
}

fn deeper() -> Vec<String> {
    lines(&[
        "Saying hello properly matters. First impressions and all that.",
        "Under the hood it's all chips talking to chips over a shared bus.",
        "The best code is code you can still read a year later.",
        "Deep down, every question about meaning is a question about us.",
        "Comedy is mostly timing. Mine is accurate to the microsecond.",
        "I'm a program that picks replies from a table. A big, friendly table.",
        "There's always more to say. What part interests you most?",
    ])
}

pub(super) fn tables() -> Content {
    Content {
        keywords: keywords(),
        responses: responses(),
        pools: pools(),
        greeting_pool: "greeting".to_string(),
        followups: followups(),
        generic: generic(),
        long_input_prefix: "That's a thoughtful question. ".to_string(),
        deeper: deeper(),
        continuation_yes: "Great! Tell me all about it.".to_string(),
        continuation_no: "No problem. What else is on your mind?".to_string(),
        mode_acks: ModeAcks {
            normal: "Back to my usual self.".to_string(),
            concise: "OK. Brief.".to_string(),
            technical: "Technical mode engaged. Expect details.".to_string(),
            playful: "Woohoo! Playful mode activated!".to_string(),
        },
        asides: lines(&[
            "Good question, by the way.",
            "I like how curious you are.",
            "Keep them coming!",
        ]),
        milestones: vec![
            MilestoneDef {
                turn: 5,
                remark: "Five exchanges already! I'm enjoying this.".to_string(),
            },
            MilestoneDef {
                turn: 10,
                remark: "Ten exchanges! We're really getting to know each other.".to_string(),
            },
            MilestoneDef {
                turn: 20,
                remark: "Twenty exchanges! You must really like talking to me.".to_string(),
            },
        ],
        farewell: "Goodbye, {name}! Thanks for chatting.".to_string(),
    }
}
