use crate::dto::{self, TaskDto};
use leptos::*;

const COLUMNS: [(&str, &str); 3] = [("todo", "To do"), ("in-progress", "In progress"), ("done", "Done")];

fn priority_rank(priority: &str) -> u8 {
    match priority {
        "high" => 0,
        "medium" => 1,
        _ => 2,
    }
}

/// Tasks grouped into status columns, highest priority first.
#[component]
pub fn TaskBoard() -> impl IntoView {
    let tasks = create_rw_signal(dto::tasks());

    let advance = move |id: i64| {
        tasks.update(|list| {
            if let Some(task) = list.iter_mut().find(|t| t.id == id) {
                task.status = match task.status.as_str() {
                    "todo" => "in-progress".into(),
                    _ => "done".into(),
                };
            }
        })
    };

    view! {
      <div class="board">
        {COLUMNS
            .into_iter()
            .map(|(status, label)| {
                let column = move || {
                    let mut items: Vec<TaskDto> = tasks
                        .get()
                        .into_iter()
                        .filter(|t| t.status == status)
                        .collect();
                    items.sort_by_key(|t| priority_rank(&t.priority));
                    items
                };
                view! {
                  <section class="panel">
                    <h3>{label}</h3>
                    <ul>
                      <For
                        each=column
                        key=|t| (t.id, t.status.clone())
                        children=move |t| {
                            let id = t.id;
                            let done = t.status == "done";
                            view! {
                              <li>
                                <div>{t.title.clone()}</div>
                                <div class="meta">{t.priority.clone()}</div>
                                <Show when=move || !done fallback=|| ()>
                                  <button on:click=move |_| advance(id)>"Advance"</button>
                                </Show>
                              </li>
                            }
                        }
                      />
                    </ul>
                  </section>
                }
            })
            .collect_view()}
      </div>
    }
}

/// Phase checklist with overall completion.
#[component]
pub fn SalesLifecycle() -> impl IntoView {
    let phases = create_rw_signal(dto::sales_phases());

    let progress = move || {
        phases.with(|list| {
            let (done, total) = list
                .iter()
                .flat_map(|p| p.steps.iter())
                .fold((0usize, 0usize), |(d, t), s| (d + usize::from(s.done), t + 1));
            if total == 0 { 0 } else { done * 100 / total }
        })
    };

    let toggle = move |phase: usize, step: usize| {
        phases.update(|list| {
            if let Some(s) = list.get_mut(phase).and_then(|p| p.steps.get_mut(step)) {
                s.done = !s.done;
            }
        })
    };

    view! {
      <div class="stack">
        <div class="meta">{move || format!("{}% complete", progress())}</div>
        {move || {
            phases
                .get()
                .into_iter()
                .enumerate()
                .map(|(pi, phase)| view! {
                  <div class="panel">
                    <h3>{phase.name}</h3>
                    <ul>
                      {phase
                          .steps
                          .into_iter()
                          .enumerate()
                          .map(|(si, step)| view! {
                            <li>
                              <label>
                                <input type="checkbox" prop:checked=step.done on:change=move |_| toggle(pi, si)/>
                                {step.label}
                              </label>
                            </li>
                          })
                          .collect_view()}
                    </ul>
                  </div>
                })
                .collect_view()
        }}
      </div>
    }
}
