use crate::core::state::SiteState;
use crate::pages::{despawn_with, full_screen_column};
use crate::ui::bundles::*;
use crate::ui::widgets::{spawn_button_with_marker, spawn_progress_bar};
use crate::ui::*;
use bevy::ecs::relationship::RelatedSpawnerCommands;
use bevy::prelude::*;
use ecogen::constants::WASTE_REDUCTION;
use ecogen::quiz::{ImpactColor, ImpactResult, Question, QuizFlow};

pub struct QuizPlugin;

impl Plugin for QuizPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnswerSelected>()
            .add_systems(OnEnter(SiteState::Quiz), start_quiz)
            .add_systems(
                OnExit(SiteState::Quiz),
                (despawn_with::<QuizUI>, end_quiz),
            )
            .add_systems(
                Update,
                (
                    handle_option_buttons,
                    apply_answers,
                    handle_get_started_button,
                    render_quiz.run_if(resource_exists_and_changed::<ActiveQuiz>),
                )
                    .chain()
                    .run_if(in_state(SiteState::Quiz)),
            );
    }
}

/// Quiz session owned by the quiz page.
#[derive(Resource, Default)]
pub struct ActiveQuiz(pub QuizFlow);

#[derive(Message, Debug, Clone, Copy)]
pub struct AnswerSelected(pub u8);

#[derive(Component)]
struct QuizUI;

#[derive(Component)]
struct QuizProgress;

#[derive(Component)]
struct OptionButton(u8);

#[derive(Component)]
struct GetStartedButton;

const TEXT_DARK: Color = Color::srgb(0.122, 0.161, 0.216);
const TEXT_BODY: Color = Color::srgb(0.294, 0.333, 0.388);
const OPTION_COLOR: Color = Color::srgb(0.976, 0.980, 0.984);
const OPTION_HOVER: Color = Color::srgb(0.863, 0.988, 0.906);
const OPTION_PRESSED: Color = Color::srgb(0.733, 0.969, 0.816);

fn impact_color(color: ImpactColor) -> Color {
    match color {
        ImpactColor::Green => Color::srgb(0.086, 0.639, 0.290),
        ImpactColor::Yellow => Color::srgb(0.792, 0.541, 0.016),
        ImpactColor::Blue => Color::srgb(0.145, 0.388, 0.922),
    }
}

fn start_quiz(mut commands: Commands) {
    commands.insert_resource(ClearColor(PAPER));
    commands.init_resource::<ActiveQuiz>();
}

fn end_quiz(mut commands: Commands) {
    commands.remove_resource::<ActiveQuiz>();
}

fn handle_option_buttons(
    button_q: Query<(&Interaction, &OptionButton), Changed<Interaction>>,
    mut answers: MessageWriter<AnswerSelected>,
) {
    for (interaction, option) in button_q.iter() {
        if *interaction == Interaction::Pressed {
            answers.write(AnswerSelected(option.0));
        }
    }
}

fn apply_answers(mut answers: MessageReader<AnswerSelected>, mut quiz: ResMut<ActiveQuiz>) {
    for AnswerSelected(value) in answers.read() {
        if let Err(e) = quiz.0.answer(*value) {
            warn!("Answer {value} not accepted: {e}");
        }
    }
}

fn handle_get_started_button(
    button_q: Query<&Interaction, (Changed<Interaction>, With<GetStartedButton>)>,
    quiz: Res<ActiveQuiz>,
) {
    for interaction in button_q.iter() {
        if *interaction == Interaction::Pressed {
            info!("Lead captured with answers {:?}", quiz.0.answers());
        }
    }
}

/// Rebuilds the page whenever the session moves on.
fn render_quiz(mut commands: Commands, quiz: Res<ActiveQuiz>, ui_q: Query<Entity, With<QuizUI>>) {
    for entity in ui_q.iter() {
        commands.entity(entity).despawn();
    }

    let mut root = commands.spawn((full_screen_column(), QuizUI));
    if let Some(question) = quiz.0.current_question() {
        let position = quiz.0.answers().len() + 1;
        let total = quiz.0.questions().len();
        let progress = quiz.0.progress();
        root.with_children(|parent| {
            spawn_question(parent, question, position, total, progress);
        });
        return;
    }

    match quiz.0.result() {
        Ok(result) => {
            root.with_children(|parent| spawn_results(parent, &result));
        }
        Err(e) => warn!("Quiz finished without a result: {e}"),
    }
}

fn spawn_question(
    parent: &mut RelatedSpawnerCommands<ChildOf>,
    question: &Question,
    position: usize,
    total: usize,
    progress: f32,
) {
    parent.spawn(
        LabelBundle::new("Calculate Your Impact", 40.0, TEXT_DARK)
            .with_margin(UiRect::bottom(Val::Px(12.0))),
    );
    parent.spawn(
        LabelBundle::new(
            "Help us understand your packaging needs to calculate your potential environmental impact",
            18.0,
            TEXT_BODY,
        )
        .with_max_width(640.0)
        .with_margin(UiRect::bottom(Val::Px(32.0))),
    );
    spawn_progress_bar(
        parent,
        ProgressTrackBundle::new(Val::Px(640.0), 12.0, Color::srgb(0.898, 0.906, 0.922), progress),
        GREEN,
        QuizProgress,
    );

    parent
        .spawn(
            PanelBundle::new(Val::Px(640.0), Color::WHITE, 24.0)
                .with_margin(UiRect::vertical(Val::Px(24.0))),
        )
        .with_children(|parent| {
            parent.spawn(
                LabelBundle::new(question.prompt, 24.0, TEXT_DARK)
                    .with_margin(UiRect::bottom(Val::Px(16.0))),
            );
            for option in &question.options {
                parent
                    .spawn((
                        CtaButtonBundle::new(576.0, 64.0, OPTION_COLOR, OPTION_HOVER, OPTION_PRESSED),
                        OptionButton(option.value),
                    ))
                    .with_children(|parent| {
                        parent.spawn(LabelBundle::new(option.label, 18.0, TEXT_DARK));
                    });
            }
        });

    parent.spawn(LabelBundle::new(
        &format!("Question {position} of {total}"),
        16.0,
        MUTED,
    ));
}

fn spawn_result_card(
    parent: &mut RelatedSpawnerCommands<ChildOf>,
    title: &str,
    value: &str,
    caption: &str,
    accent: Color,
) {
    parent
        .spawn(PanelBundle::new(Val::Px(260.0), accent.with_alpha(0.15), 16.0))
        .with_children(|parent| {
            parent.spawn(LabelBundle::new(title, 20.0, TEXT_DARK));
            parent.spawn(LabelBundle::new(value, 32.0, accent));
            parent.spawn(LabelBundle::new(caption, 14.0, TEXT_BODY));
        });
}

fn spawn_results(parent: &mut RelatedSpawnerCommands<ChildOf>, result: &ImpactResult) {
    let accent = impact_color(result.color);

    parent.spawn(
        LabelBundle::new("Your Sustainability Impact", 44.0, TEXT_DARK)
            .with_margin(UiRect::bottom(Val::Px(32.0))),
    );

    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            column_gap: Val::Px(32.0),
            margin: UiRect::bottom(Val::Px(40.0)),
            ..default()
        })
        .with_children(|parent| {
            spawn_result_card(
                parent,
                "Environmental Savings",
                result.savings_range,
                "Potential CO2 reduction",
                accent,
            );
            spawn_result_card(
                parent,
                "Impact Level",
                result.level.label(),
                "Sustainability potential",
                accent,
            );
            spawn_result_card(
                parent,
                "Waste Reduction",
                WASTE_REDUCTION,
                "Less packaging waste",
                Color::srgb(0.918, 0.345, 0.047),
            );
        });

    parent
        .spawn(PanelBundle::new(Val::Px(860.0), GREEN, 24.0))
        .with_children(|parent| {
            parent.spawn(LabelBundle::new("Ready to Make a Difference?", 28.0, Color::WHITE));
            parent.spawn(
                LabelBundle::new(
                    "Switch to Pudumjee Papers' sustainable packaging solutions and start your journey towards a greener future today.",
                    18.0,
                    Color::WHITE,
                )
                .with_max_width(720.0)
                .with_margin(UiRect::bottom(Val::Px(16.0))),
            );
            spawn_button_with_marker(
                parent,
                "Get Started Today",
                CtaButtonBundle::new(240.0, 52.0, BLUE, GREEN_HOVER, GREEN_PRESSED),
                GetStartedButton,
            );
        });

    parent.spawn(
        LabelBundle::new(
            "Join thousands of companies already making a positive environmental impact",
            16.0,
            TEXT_BODY,
        )
        .with_margin(UiRect::top(Val::Px(24.0))),
    );
}
