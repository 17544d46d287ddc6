use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;

use hcf_core::model::{DropOutcome, POINTS_PER_ROUND};

use crate::context::AppContext;
use crate::vm::{GameMessage, map_board};

mod scripts;

use scripts::{SoundCue, confetti_script, sound_script};

#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();

    // Start round 1 exactly once, when the view first mounts.
    let initial = use_hook({
        let ctx = ctx.clone();
        move || {
            let mut game = ctx.game();
            game.start()
                .map(|snapshot| {
                    let progress = game.progress();
                    map_board(&snapshot, &progress)
                })
                .map_err(|err| err.to_string())
        }
    });

    let initial_board = initial.clone().ok();
    let initial_fatal = initial.err();
    let mut board = use_signal(move || initial_board.clone());
    let mut fatal = use_signal(move || initial_fatal.clone());
    let mut message = use_signal(|| None::<GameMessage>);
    let mut hint_glow = use_signal(Vec::<u32>::new);
    let mut drag_over = use_signal(|| false);
    let mut round_done = use_signal(|| false);
    let mut game_over = use_signal(|| false);

    let ctx_drop = ctx.clone();
    let on_drop = move |evt: DragEvent| {
        evt.prevent_default();
        drag_over.set(false);

        let dropped = {
            let mut game = ctx_drop.game();
            game.drop_current()
        };
        let report = match dropped {
            Ok(Some(report)) => report,
            Ok(None) => return,
            Err(err) => {
                fatal.set(Some(err.to_string()));
                return;
            }
        };

        match report.outcome {
            DropOutcome::Accepted => {
                let (snapshot, progress) = {
                    let game = ctx_drop.game();
                    (game.snapshot(), game.progress())
                };
                if let Some(snapshot) = snapshot {
                    board.set(Some(map_board(&snapshot, &progress)));
                }

                if report.round_complete {
                    if let (Some(vm), Some(hcf)) = (board(), report.target_hcf) {
                        message.set(Some(GameMessage::round_complete(
                            vm.number1, vm.number2, hcf,
                        )));
                    }
                    hint_glow.set(Vec::new());
                    round_done.set(true);
                    let _ = eval(&sound_script(SoundCue::Success));
                    let _ = eval(&confetti_script());
                } else {
                    let _ = eval(&sound_script(SoundCue::Correct));
                }
            }
            // The drop zone already holds this tile; nothing to do.
            DropOutcome::Duplicate => {}
            DropOutcome::Rejected => {
                let _ = eval(&sound_script(SoundCue::Incorrect));
                let notice = GameMessage::not_common();
                message.set(Some(notice.clone()));
                spawn(async move {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    if message.read().as_ref() == Some(&notice) {
                        message.set(None);
                    }
                });
            }
        }
    };

    let ctx_hint = ctx.clone();
    let on_hint = move |_: MouseEvent| {
        let remaining = {
            let game = ctx_hint.game();
            game.hint()
        };
        let Ok(remaining) = remaining else { return };

        let _ = eval(&sound_script(SoundCue::Hint));
        hint_glow.set(remaining.clone());
        spawn(async move {
            tokio::time::sleep(Duration::from_secs(3)).await;
            if *hint_glow.read() == remaining {
                hint_glow.set(Vec::new());
            }
        });
    };

    let ctx_next = ctx.clone();
    let on_next = use_callback(move |()| {
        let advanced = {
            let mut game = ctx_next.game();
            if game_over() {
                game.restart().map(|snapshot| {
                    let progress = game.progress();
                    Some(map_board(&snapshot, &progress))
                })
            } else {
                game.next_round().map(|next| {
                    let progress = game.progress();
                    next.map(|snapshot| map_board(&snapshot, &progress))
                })
            }
        };

        match advanced {
            Ok(Some(vm)) => {
                board.set(Some(vm));
                message.set(None);
                hint_glow.set(Vec::new());
                round_done.set(false);
                game_over.set(false);
            }
            Ok(None) => {
                let progress = ctx_next.game().progress();
                message.set(Some(GameMessage::game_complete(
                    progress.score,
                    progress.total_rounds * POINTS_PER_ROUND,
                )));
                round_done.set(false);
                game_over.set(true);
            }
            Err(err) => fatal.set(Some(err.to_string())),
        }
    });

    let fatal_msg = fatal();
    let board_vm = board();
    let glow = hint_glow();
    let notice = message().map(|m| (format!("result-message {}", m.kind.css_class()), m.text));
    let zone_class = if drag_over() {
        "drop-zone drag-over"
    } else {
        "drop-zone"
    };

    rsx! {
        div { id: "game-root", class: "game",
            match (fatal_msg, board_vm) {
                (Some(err), _) => rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{err}" }
                    }
                },
                (None, Some(vm)) => rsx! {
                    header { class: "status-bar",
                        span { class: "round-label", "{vm.round_label}" }
                        span { class: "score-label", "{vm.score_label}" }
                    }
                    h2 { class: "question",
                        "Find the common factors of {vm.number1} and {vm.number2}"
                    }
                    div { class: "factor-lists",
                        FactorList {
                            title: "Factors of {vm.number1}",
                            tiles: vm.tiles1.clone(),
                            glow: glow.clone(),
                        }
                        FactorList {
                            title: "Factors of {vm.number2}",
                            tiles: vm.tiles2.clone(),
                            glow: glow.clone(),
                        }
                    }
                    div {
                        class: "{zone_class}",
                        ondragover: move |evt| evt.prevent_default(),
                        ondragenter: move |_| drag_over.set(true),
                        ondragleave: move |_| drag_over.set(false),
                        ondrop: on_drop,
                        if vm.dropped.is_empty() {
                            p { class: "drop-hint", "Drop common factors here" }
                        }
                        for factor in vm.dropped.clone() {
                            div { key: "{factor}", class: "factor-tile dropped", "{factor}" }
                        }
                    }
                    match notice {
                        Some((notice_class, notice_text)) => rsx! {
                            p { class: "{notice_class}", "{notice_text}" }
                        },
                        None => rsx! {},
                    }
                    div { class: "controls",
                        if !round_done() && !game_over() {
                            button { class: "hint-btn", onclick: on_hint, "Hint" }
                        }
                        if round_done() {
                            button { class: "next-btn", onclick: move |_| on_next.call(()), "Next Question" }
                        }
                        if game_over() {
                            button { class: "next-btn", onclick: move |_| on_next.call(()), "Play Again" }
                        }
                    }
                    div { id: "confetti-container" }
                },
                (None, None) => rsx! {
                    p { "Loading..." }
                },
            }
        }
    }
}

#[component]
fn FactorList(title: String, tiles: Vec<u32>, glow: Vec<u32>) -> Element {
    rsx! {
        section { class: "factor-list",
            h3 { "{title}" }
            div { class: "tiles",
                for factor in tiles.clone() {
                    FactorTile { key: "{factor}", factor, glowing: glow.contains(&factor) }
                }
            }
        }
    }
}

#[component]
fn FactorTile(factor: u32, glowing: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let ctx_end = ctx.clone();
    let class = if glowing {
        "factor-tile hint-glow"
    } else {
        "factor-tile"
    };

    rsx! {
        div {
            class: "{class}",
            draggable: true,
            ondragstart: move |_| ctx.game().begin_drag(factor),
            ondragend: move |_| ctx_end.game().cancel_drag(),
            "{factor}"
        }
    }
}
