//! Snippet manager page.
//!
//! The form on the left creates or edits snippets; the list on the right
//! shows the saved collection, newest first. Every mutation goes through
//! [`SnippetBook`], so a failed localStorage write leaves both the list and
//! the form untouched and surfaces the error inline.

use gloo_timers::future::TimeoutFuture;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::icons as ic;
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Label, Motion, PageHeader, Reveal, Select, StatusKind,
    StatusMessage, TextArea, TextInput,
};
use crate::config::{COPY_FEEDBACK_MS, LANGUAGES};
use crate::core::error::SnippetError;
use crate::core::{LocalStore, SnippetBook};
use crate::models::{AppRoute, CopyIndicator, Snippet, SnippetDraft};
use crate::utils::dom;
use crate::utils::format::display_date;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

type Book = SnippetBook<LocalStore>;

/// Form fields plus the id of the snippet being edited, if any.
#[derive(Clone, Copy)]
struct SnippetForm {
    title: RwSignal<String>,
    language: RwSignal<String>,
    code: RwSignal<String>,
    editing: RwSignal<Option<String>>,
}

impl SnippetForm {
    fn new() -> Self {
        let defaults = SnippetDraft::default();
        Self {
            title: RwSignal::new(defaults.title),
            language: RwSignal::new(defaults.language),
            code: RwSignal::new(defaults.code),
            editing: RwSignal::new(None),
        }
    }

    fn draft(&self) -> SnippetDraft {
        SnippetDraft::new(
            self.title.get_untracked(),
            self.language.get_untracked(),
            self.code.get_untracked(),
        )
    }

    fn load(&self, id: String, draft: SnippetDraft) {
        self.title.set(draft.title);
        self.language.set(draft.language);
        self.code.set(draft.code);
        self.editing.set(Some(id));
    }

    fn reset(&self) {
        let defaults = SnippetDraft::default();
        self.title.set(defaults.title);
        self.language.set(defaults.language);
        self.code.set(defaults.code);
        self.editing.set(None);
    }

    fn is_editing(&self, id: &str) -> bool {
        self.editing.with_untracked(|e| e.as_deref() == Some(id))
    }
}

/// Run a mutation against the book. Failures are reported through `error`
/// and yield `None`.
fn mutate<R>(
    book: RwSignal<Book>,
    error: RwSignal<Option<String>>,
    f: impl FnOnce(&mut Book) -> Result<R, SnippetError>,
) -> Option<R> {
    match book.try_update(f)? {
        Ok(value) => {
            error.set(None);
            Some(value)
        }
        Err(e) => {
            error.set(Some(e.to_string()));
            None
        }
    }
}

#[component]
pub fn SnippetsPage() -> impl IntoView {
    let book = RwSignal::new(Book::load(LocalStore));
    let form = SnippetForm::new();
    let error = RwSignal::new(None::<String>);
    let copied = RwSignal::new(CopyIndicator::default());

    let is_editing = Signal::derive(move || form.editing.with(Option::is_some));
    let has_snippets = Signal::derive(move || book.with(|b| !b.is_empty()));

    let on_submit = move |_: MouseEvent| {
        let target = form.editing.get_untracked();
        let draft = form.draft();
        let saved = match target {
            Some(id) => mutate(book, error, |b| b.update(Some(&id), draft)),
            None => mutate(book, error, |b| b.add(draft).map(|_| ())),
        };
        if saved.is_some() {
            form.reset();
        }
    };

    let on_cancel = move |_: MouseEvent| {
        form.reset();
        error.set(None);
    };

    let on_clear_all = move |_: MouseEvent| {
        if !dom::confirm("Are you sure you want to delete all snippets?") {
            return;
        }
        if mutate(book, error, |b| b.clear()).is_some() {
            form.reset();
        }
    };

    let on_edit = Callback::new(move |id: String| {
        if let Some(draft) = book.with_untracked(|b| b.get(&id).map(SnippetDraft::from)) {
            form.load(id, draft);
            error.set(None);
        }
    });

    let on_delete = Callback::new(move |id: String| {
        if mutate(book, error, |b| b.remove(&id)).is_some() && form.is_editing(&id) {
            form.reset();
        }
    });

    let on_copy = Callback::new(move |snippet: Snippet| {
        spawn_local(async move {
            match dom::copy_to_clipboard(&snippet.code).await {
                Ok(()) => {
                    copied.try_update(|c| c.mark(&snippet.id));
                    TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                    // Only clears if no later copy moved the indicator
                    copied.try_update(|c| c.expire(&snippet.id));
                }
                Err(e) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::warn_1(&format!("Copy failed: {}", e).into());
                    error.try_set(Some(e.to_string()));
                }
            }
        });
    });

    view! {
        <div class=css::page>
            <PageHeader route=AppRoute::Snippets />

            <div class=css::snippetLayout>
                <Reveal motion=Motion::Left class=css::snippetForm>
                    <div class=css::field>
                        <Label for_id="snippet-title">"Title"</Label>
                        <TextInput value=form.title id="snippet-title" placeholder="Snippet title..." />
                    </div>

                    <div class=css::field>
                        <Label for_id="snippet-language">"Language"</Label>
                        <Select value=form.language options=LANGUAGES id="snippet-language" />
                    </div>

                    <div class=css::field>
                        <Label for_id="snippet-code">"Code"</Label>
                        <TextArea value=form.code id="snippet-code" placeholder="Paste your code here..." />
                    </div>

                    <div class=css::formActions>
                        <Button wide=true on_click=on_submit>
                            <Show
                                when=move || is_editing.get()
                                fallback=|| view! { <Icon icon=ic::PLUS /> "Add Snippet" }
                            >
                                "Update Snippet"
                            </Show>
                        </Button>
                        <Show when=move || is_editing.get()>
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Icon
                                label="Cancel editing"
                                title="Cancel editing"
                                on_click=on_cancel
                            >
                                <Icon icon=ic::CLOSE />
                            </Button>
                        </Show>
                    </div>

                    {move || error.get().map(|message| view! {
                        <StatusMessage kind=StatusKind::Error message=message />
                    })}

                    <Show when=move || has_snippets.get()>
                        <Button variant=ButtonVariant::Destructive wide=true on_click=on_clear_all>
                            "Clear All Snippets"
                        </Button>
                    </Show>
                </Reveal>

                <div class=css::snippetList>
                    <Show
                        when=move || has_snippets.get()
                        fallback=|| view! {
                            <p class=css::emptyState>"No snippets yet. Add your first snippet!"</p>
                        }
                    >
                        <For
                            each=move || book.with(|b| b.snippets().to_vec())
                            key=|snippet| snippet.clone()
                            children=move |snippet| view! {
                                <SnippetCard
                                    snippet=snippet
                                    copied=copied
                                    on_copy=on_copy
                                    on_edit=on_edit
                                    on_delete=on_delete
                                />
                            }
                        />
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SnippetCard(
    snippet: Snippet,
    copied: RwSignal<CopyIndicator>,
    on_copy: Callback<Snippet>,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let id = snippet.id.clone();
    let is_copied = {
        let id = id.clone();
        Signal::derive(move || copied.with(|c| c.is_copied(&id)))
    };
    let meta = format!(
        "{} • {}",
        snippet.language_label(),
        display_date(&snippet.created_at)
    );

    let copy_icon = move || {
        if is_copied.get() {
            view! { <span class=css::copied><Icon icon=ic::CHECK /></span> }.into_any()
        } else {
            view! { <Icon icon=ic::COPY /> }.into_any()
        }
    };

    let copy_source = snippet.clone();
    let edit_id = id.clone();
    let delete_id = id;

    view! {
        <Reveal motion=Motion::Up class=css::snippetCard>
            <div class=css::snippetHeader>
                <div class=css::snippetHeading>
                    <h3 class=css::snippetTitle>{snippet.title}</h3>
                    <p class=css::snippetMeta>{meta}</p>
                </div>
                <div class=css::snippetActions>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        label="Copy code"
                        title="Copy code"
                        on_click=move |_: MouseEvent| on_copy.run(copy_source.clone())
                    >
                        {copy_icon}
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        label="Edit snippet"
                        title="Edit snippet"
                        on_click=move |_: MouseEvent| on_edit.run(edit_id.clone())
                    >
                        <Icon icon=ic::EDIT />
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        label="Delete snippet"
                        title="Delete snippet"
                        on_click=move |_: MouseEvent| on_delete.run(delete_id.clone())
                    >
                        <span class=css::danger><Icon icon=ic::TRASH /></span>
                    </Button>
                </div>
            </div>
            <pre class=css::codeBlock>
                <code>{snippet.code}</code>
            </pre>
        </Reveal>
    }
}
