//! Ui domain: the CV page panel.
//!
//! One panel on the left side of the screen renders whichever [`Page`] is
//! active, entirely from the loaded [`CvContent`]. Changing page or reloading
//! content rebuilds the panel's children from scratch.

use bevy::prelude::*;

use crate::content::{CvContent, CvData};
use crate::core::Page;

use super::contact::{SendButton, SendStatus};
use super::{PANEL_BG, PANEL_BORDER, body_line, dim_line, heading};

/// Marker for the page panel root node.
#[derive(Component, Debug)]
pub struct PagePanel;

/// The page whose content is currently built into the panel. `None` until
/// the first rebuild.
#[derive(Component, Debug, Default)]
pub struct BuiltPage(pub Option<Page>);

pub fn spawn_page_panel(mut commands: Commands) {
    commands.spawn((
        PagePanel,
        BuiltPage::default(),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(16.0),
            width: Val::Px(380.0),
            max_height: Val::Percent(85.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(6.0),
            padding: UiRect::all(Val::Px(14.0)),
            border: UiRect::all(Val::Px(2.0)),
            overflow: Overflow::clip_y(),
            ..default()
        },
        BackgroundColor(PANEL_BG),
        BorderColor::all(PANEL_BORDER),
        ZIndex(10),
    ));
}

pub fn rebuild_page_panel(
    mut commands: Commands,
    page: Res<State<Page>>,
    content: Res<CvContent>,
    mut panels: Query<(Entity, &mut BuiltPage), With<PagePanel>>,
) {
    let current = *page.get();
    for (entity, mut built) in &mut panels {
        if built.0 == Some(current) && !content.is_changed() {
            continue;
        }
        built.0 = Some(current);
        commands.entity(entity).despawn_related::<Children>();
        let cv = content.0.clone();
        commands.entity(entity).with_children(|parent| {
            parent.spawn(heading(current.title()));
            match current {
                Page::Home => build_home(parent, &cv),
                Page::Experience => build_experience(parent, &cv),
                Page::Skills => build_skills(parent, &cv),
                Page::Education => build_education(parent, &cv),
                Page::Achievements => build_achievements(parent, &cv),
                Page::Contact => build_contact(parent, &cv),
            }
        });
    }
}

fn build_home(parent: &mut ChildSpawnerCommands, cv: &CvData) {
    parent.spawn(body_line(cv.personal.name.clone()));
    parent.spawn(dim_line(cv.personal.title.clone()));
    parent.spawn(body_line(cv.objective.clone()));
    parent.spawn(dim_line("Press M for the dungeon map, H for help."));
}

fn build_experience(parent: &mut ChildSpawnerCommands, cv: &CvData) {
    for exp in &cv.experience {
        let badge = if exp.current { " [CURRENT]" } else { "" };
        parent.spawn(body_line(format!("{}{}", exp.company, badge)));
        parent.spawn(dim_line(format!("{} | {}", exp.position, exp.period)));
        for line in &exp.responsibilities {
            parent.spawn(dim_line(format!("- {}", line)));
        }
        if !exp.tech_stack.is_empty() {
            parent.spawn(dim_line(format!("Stack: {}", exp.tech_stack.join(", "))));
        }
    }
}

fn build_skills(parent: &mut ChildSpawnerCommands, cv: &CvData) {
    parent.spawn(body_line("Technical"));
    for skill in &cv.skills.technical {
        parent.spawn(dim_line(format!("- {}", skill)));
    }
    parent.spawn(body_line("Soft"));
    for skill in &cv.skills.soft {
        parent.spawn(dim_line(format!("- {}", skill)));
    }
}

fn build_education(parent: &mut ChildSpawnerCommands, cv: &CvData) {
    for edu in &cv.education {
        parent.spawn(body_line(edu.institution.clone()));
        parent.spawn(dim_line(format!(
            "{} in {} | {}",
            edu.degree, edu.field, edu.period
        )));
    }
}

fn build_achievements(parent: &mut ChildSpawnerCommands, cv: &CvData) {
    for award in &cv.awards {
        parent.spawn(body_line(award.title.clone()));
        parent.spawn(dim_line(format!("{} | {}", award.organization, award.year)));
        if !award.description.is_empty() {
            parent.spawn(dim_line(award.description.clone()));
        }
    }
    for cert in &cv.certificates {
        parent.spawn(body_line(cert.title.clone()));
        parent.spawn(dim_line(format!("{} | {}", cert.issuer, cert.year)));
    }
}

fn build_contact(parent: &mut ChildSpawnerCommands, cv: &CvData) {
    parent.spawn(body_line(format!("Email: {}", cv.personal.email)));
    parent.spawn(body_line(format!("Phone: {}", cv.personal.phone)));
    parent.spawn(dim_line(cv.personal.address.clone()));
    parent.spawn(dim_line(cv.personal.linkedin.clone()));
    parent
        .spawn((
            Button,
            SendButton,
            Node {
                width: Val::Px(180.0),
                height: Val::Px(38.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                margin: UiRect::top(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.15, 0.3, 0.15, 0.9)),
            BorderColor::all(PANEL_BORDER),
        ))
        .with_child(body_line("SEND MESSAGE"));
    parent.spawn((SendStatus, dim_line("")));
}
