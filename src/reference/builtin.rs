use std::collections::BTreeMap;

use super::{CommandCategory, CommandRecord, VersionDetail};
use crate::catalog::Platform;

fn record(
    name: &str,
    description: &str,
    category: CommandCategory,
    details: Vec<(Platform, VersionDetail)>,
) -> CommandRecord {
    CommandRecord {
        name: name.to_string(),
        description: description.to_string(),
        category,
        details: details.into_iter().collect::<BTreeMap<_, _>>(),
    }
}

fn deprecated(syntax: &str, reason: &str, range: &str) -> VersionDetail {
    VersionDetail {
        deprecated: true,
        deprecation_reason: Some(reason.to_string()),
        version_range: Some(range.to_string()),
        ..VersionDetail::new(syntax)
    }
}

fn with_level(syntax: &str, level: u8) -> VersionDetail {
    VersionDetail {
        permission_level: Some(level),
        ..VersionDetail::new(syntax)
    }
}

/// The bundled command reference.
pub fn builtin_table() -> Vec<CommandRecord> {
    use CommandCategory::*;
    use Platform::*;

    vec![
        record(
            "help",
            "Lists available commands or shows usage for one command.",
            Basic,
            vec![
                (Java, VersionDetail::new("/help [<command>]")),
                (Bedrock, VersionDetail::new("/help [command: CommandName]")),
            ],
        ),
        record(
            "msg",
            "Sends a private message to one or more players.",
            Basic,
            vec![
                (Java, VersionDetail::new("/msg <targets> <message>")),
                (Bedrock, VersionDetail::new("/msg <target: target> <message: message>")),
            ],
        ),
        record(
            "give",
            "Gives an item to a player.",
            Cheat,
            vec![
                (
                    Java,
                    VersionDetail {
                        legacy_syntax: Some(
                            "/give <player> <item> [amount] [data] [dataTag]".into(),
                        ),
                        version_range: Some("1.13+".into()),
                        ..with_level("/give <targets> <item>[<components>] [<count>]", 2)
                    },
                ),
                (
                    Bedrock,
                    with_level(
                        "/give <player: target> <itemName: Item> [amount: int] [data: int]",
                        1,
                    ),
                ),
            ],
        ),
        record(
            "gamemode",
            "Sets a player's game mode.",
            Cheat,
            vec![
                (Java, with_level("/gamemode <mode> [<target>]", 2)),
                (Bedrock, with_level("/gamemode <gameMode: GameMode> [player: target]", 1)),
            ],
        ),
        record(
            "effect",
            "Adds or removes status effects on players and mobs.",
            Cheat,
            vec![
                (
                    Java,
                    with_level(
                        "/effect give <targets> <effect> [<seconds>] [<amplifier>] \
                         [<hideParticles>]",
                        2,
                    ),
                ),
                (
                    Bedrock,
                    with_level(
                        "/effect <player: target> <effect: Effect> [seconds: int] [amplifier: int]",
                        1,
                    ),
                ),
            ],
        ),
        record(
            "locate",
            "Finds the nearest structure or biome of the given type.",
            Cheat,
            vec![
                (
                    Java,
                    VersionDetail {
                        version_range: Some("1.19+".into()),
                        legacy_syntax: Some("/locate <structure>".into()),
                        ..with_level("/locate (structure|biome|poi) <name>", 2)
                    },
                ),
                (Bedrock, with_level("/locate structure <structure: string>", 1)),
            ],
        ),
        record(
            "locatebiome",
            "Finds the nearest biome of the given type.",
            Cheat,
            vec![(
                Java,
                deprecated("/locatebiome <biome>", "Merged into /locate biome", "1.16-1.18.2"),
            )],
        ),
        record(
            "op",
            "Grants operator status to a player.",
            Admin,
            vec![
                (Java, with_level("/op <targets>", 3)),
                (Bedrock, with_level("/op <player: target>", 2)),
            ],
        ),
        record(
            "ban",
            "Adds a player to the server ban list.",
            Admin,
            vec![(Java, with_level("/ban <targets> [<reason>]", 3))],
        ),
        record(
            "gamerule",
            "Sets or queries a game rule value.",
            Admin,
            vec![
                (Java, with_level("/gamerule <rule name> [<value>]", 2)),
                (Bedrock, with_level("/gamerule <rule: BoolGameRule> [value: Boolean]", 1)),
            ],
        ),
        record(
            "execute",
            "Runs another command with a changed executor, position or condition.",
            Technical,
            vec![
                (
                    Java,
                    VersionDetail {
                        version_range: Some("1.13+".into()),
                        legacy_syntax: Some("/execute <entity> <x> <y> <z> <command>".into()),
                        ..with_level("/execute <subcommand> ... run <command>", 2)
                    },
                ),
                (Bedrock, with_level("/execute <subcommand> ... run <command>", 1)),
            ],
        ),
        record(
            "testforblock",
            "Tests whether a certain block is in a certain location.",
            Technical,
            vec![
                (
                    Java,
                    deprecated(
                        "/testforblock <x> <y> <z> <block>",
                        "Replaced by /execute if block",
                        "1.4.2-1.12.2",
                    ),
                ),
                (
                    Bedrock,
                    with_level("/testforblock <position: x y z> <tileName: Block>", 1),
                ),
            ],
        ),
        record(
            "scoreboard",
            "Manages scoreboard objectives and players.",
            Technical,
            vec![
                (
                    Java,
                    VersionDetail {
                        requirements: vec!["Objective must exist before setting scores".into()],
                        ..with_level(
                            "/scoreboard objectives add <objective> <criteria> [<displayName>]",
                            2,
                        )
                    },
                ),
                (
                    Bedrock,
                    with_level("/scoreboard objectives add <name> dummy [displayName]", 1),
                ),
            ],
        ),
    ]
}
