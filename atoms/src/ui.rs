//! egui panels: the clickable periodic table and the element sidebar

use egui::{Color32, Context, RichText};

use crate::atom::AtomGroup;
use crate::elements::{self, BondingType};
use crate::nucleus::{Nucleon, NucleusConfig};
use crate::periodic_table::{atomic_number_at, COLUMNS, F_BLOCK_ROW, ROWS};

/// Clickable periodic table docked to the bottom of the window
pub struct PeriodicTableView {
    pub cell_size: f32,
}

impl Default for PeriodicTableView {
    fn default() -> Self {
        Self { cell_size: 38.0 }
    }
}

impl PeriodicTableView {
    /// Draw the table; `on_select` fires with the atomic number of a clicked cell
    pub fn show(&self, ctx: &Context, selected: Option<u8>, mut on_select: impl FnMut(u8)) {
        let cell = egui::vec2(self.cell_size, self.cell_size);

        egui::TopBottomPanel::bottom("periodic_table")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                egui::Grid::new("periodic_table_grid")
                    .spacing([2.0, 2.0])
                    .show(ui, |ui| {
                        for row in 0..ROWS {
                            if row == F_BLOCK_ROW {
                                ui.label("");
                                ui.end_row();
                            }
                            for column in 0..COLUMNS {
                                let element = atomic_number_at(row, column)
                                    .and_then(|z| elements::element(z).ok());
                                let Some(element) = element else {
                                    let _ = ui.allocate_space(cell);
                                    continue;
                                };

                                let label = RichText::new(format!(
                                    "{}\n{}",
                                    element.atomic_number, element.symbol
                                ))
                                .small()
                                .color(Color32::BLACK);
                                let button = egui::Button::new(label)
                                    .fill(bonding_color(element.bonding_type))
                                    .selected(selected == Some(element.atomic_number));

                                let response = ui
                                    .add_sized(cell, button)
                                    .on_hover_text(element.name);
                                if response.clicked() {
                                    on_select(element.atomic_number);
                                }
                            }
                            ui.end_row();
                        }
                    });
                ui.add_space(4.0);
            });
    }
}

fn bonding_color(bonding: BondingType) -> Color32 {
    match bonding {
        BondingType::Metallic => Color32::from_rgb(176, 196, 222),
        BondingType::Diatomic => Color32::from_rgb(152, 251, 152),
        BondingType::Atomic => Color32::from_rgb(238, 130, 238),
        BondingType::CovalentNetwork => Color32::from_rgb(255, 222, 173),
        BondingType::Unknown => Color32::from_rgb(200, 200, 200),
    }
}

/// Draw the element sidebar
pub fn draw_element_info(ctx: &Context, atom: Option<&AtomGroup>, config: &NucleusConfig, paused: bool) {
    egui::SidePanel::right("element_info")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            let Some(atom) = atom else {
                ui.heading(RichText::new("Pick an element").color(Color32::LIGHT_BLUE));
                ui.label("Click a cell in the periodic table below.");
                return;
            };
            let element = atom.element;

            ui.heading(
                RichText::new(format!("{} - {}", element.symbol, element.name))
                    .color(Color32::LIGHT_BLUE),
            );
            ui.separator();

            egui::Grid::new("element_facts")
                .num_columns(2)
                .spacing([10.0, 4.0])
                .show(ui, |ui| {
                    let facts = [
                        ("Standard state", element.standard_state.to_string()),
                        ("Bonding type", element.bonding_type.to_string()),
                        ("Atomic mass", element.atomic_mass.to_string()),
                        ("Protons", atom.counts.protons.to_string()),
                        ("Neutrons", atom.counts.neutrons.to_string()),
                        ("Electrons", atom.counts.electrons.to_string()),
                    ];
                    for (name, value) in facts {
                        ui.label(RichText::new(name).color(Color32::LIGHT_GREEN));
                        ui.label(value);
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.collapsing(RichText::new("Nucleus").strong(), |ui| {
                let nucleus = &atom.nucleus;
                let placed = format!("Placed {} of {}", nucleus.placed(), nucleus.requested);
                if nucleus.is_complete() {
                    ui.label(placed);
                } else {
                    ui.label(RichText::new(placed).color(Color32::YELLOW));
                }
                ui.label(format!(
                    "{} protons, {} neutrons shown",
                    nucleus.count(Nucleon::Proton),
                    nucleus.count(Nucleon::Neutron)
                ));
                ui.label(format!(
                    "{} lattice, efficiency {:.2}, radius {:.2}",
                    config.strategy.name(),
                    config.efficiency,
                    config.nucleus_radius
                ));
            });

            if atom.electrons.dropped > 0 {
                ui.label(
                    RichText::new(format!(
                        "{} electrons beyond the outer shell are not drawn",
                        atom.electrons.dropped
                    ))
                    .small()
                    .italics(),
                );
            }

            if paused {
                ui.add_space(8.0);
                ui.label(RichText::new("PAUSED").color(Color32::YELLOW));
            }
        });
}
