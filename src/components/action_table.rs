//! Action Table Component
//!
//! Lists every cached action with its running total, or explains why it can't.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::liveness::Liveness;
use crate::shell::ShellState;

/// What the list area shows. Earlier variants take precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListDisplay {
    ServerDown,
    Empty,
    Table,
}

impl ListDisplay {
    pub fn resolve(liveness: Liveness, count: usize) -> Self {
        if liveness == Liveness::Down {
            ListDisplay::ServerDown
        } else if count == 0 {
            ListDisplay::Empty
        } else {
            ListDisplay::Table
        }
    }
}

#[component]
pub fn ActionTable() -> impl IntoView {
    let ctx = use_app_context();
    let shell = ctx.shell;
    let state = shell.state();

    let actions = move || state.with(|s| s.actions.clone());
    // Memoized so the table is rebuilt only when the display state changes
    let display = Memo::new(move |_| ListDisplay::resolve(ctx.liveness.get(), state.with(|s| s.actions.len())));
    let total = move || state.with(ShellState::total_points);

    move || match display.get() {
        ListDisplay::ServerDown => view! {
            <div class="alert alert-danger">"Server is down! Please check your connection."</div>
        }.into_any(),
        ListDisplay::Empty => view! {
            <div class="alert alert-info">
                "No sustainability actions found. Start by adding a new action!"
            </div>
        }.into_any(),
        ListDisplay::Table => view! {
            <section class="card action-table">
                <div class="card-header">
                    <h3>"Sustainability Actions"</h3>
                    <span class="badge total-points">"Total Points: " {total}</span>
                </div>
                <div class="card-body table-scroll">
                    <table>
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Action"</th>
                                <th>"Date"</th>
                                <th>"Points"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=actions
                                // Key on every field so edits re-render the row
                                key=|a| (a.id, a.action.clone(), a.date, a.points)
                                children=move |action| {
                                    let id = action.id;
                                    let prompt = format!("Delete \"{}\"?", action.action);
                                    let to_edit = action.clone();
                                    let on_delete = Callback::new(move |_| {
                                        spawn_local(async move {
                                            // Failures are logged only; the row stays
                                            if let Err(err) = shell.delete(id).await {
                                                log::warn!("Action #{} was not deleted: {}", id, err);
                                            }
                                        });
                                    });

                                    view! {
                                        <tr>
                                            <td><strong>{id}</strong></td>
                                            <td>{action.action.clone()}</td>
                                            <td>{action.date.to_string()}</td>
                                            <td><span class="badge">{action.points}</span></td>
                                            <td class="row-buttons">
                                                <button
                                                    class="btn-warning btn-sm"
                                                    on:click=move |_| shell.begin_edit(to_edit.clone())
                                                >
                                                    "Edit"
                                                </button>
                                                <DeleteConfirmButton prompt=prompt on_confirm=on_delete />
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </section>
        }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_down_wins() {
        assert_eq!(ListDisplay::resolve(Liveness::Down, 0), ListDisplay::ServerDown);
        assert_eq!(ListDisplay::resolve(Liveness::Down, 3), ListDisplay::ServerDown);
    }

    #[test]
    fn test_empty_before_table() {
        assert_eq!(ListDisplay::resolve(Liveness::Up, 0), ListDisplay::Empty);
        assert_eq!(ListDisplay::resolve(Liveness::Checking, 0), ListDisplay::Empty);
        assert_eq!(ListDisplay::resolve(Liveness::Up, 2), ListDisplay::Table);
        assert_eq!(ListDisplay::resolve(Liveness::Checking, 1), ListDisplay::Table);
    }
}
