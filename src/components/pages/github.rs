//! GitHub profile and repository viewer.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::icons as ic;
use crate::components::ui::{
    Button, Motion, PageHeader, Reveal, StatusKind, StatusMessage, TextInput,
};
use crate::config::github::ACCEPT;
use crate::core::GithubClient;
use crate::models::{AppRoute, GithubProfile, GithubRepo, GithubUser, SearchState};
use crate::utils::format::{display_date, format_count};
use crate::utils::{BrowserFetcher, normalize_external_url};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn GithubPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let state = RwSignal::new(SearchState::Idle);

    let is_loading = Signal::derive(move || state.with(SearchState::is_loading));

    let search = move || {
        // The button is disabled while loading; Enter must respect that too
        if state.with_untracked(SearchState::is_loading) {
            return;
        }
        let input = username.get_untracked();
        state.set(SearchState::Loading);

        spawn_local(async move {
            let client = GithubClient::new(BrowserFetcher::with_accept(ACCEPT));
            let next = match client.fetch_profile(&input).await {
                Ok(profile) => SearchState::Loaded(profile),
                Err(e) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::warn_1(&format!("GitHub lookup failed: {:?}", e).into());
                    SearchState::Failed(e.to_string())
                }
            };
            state.try_set(next);
        });
    };

    view! {
        <div class=css::page>
            <PageHeader route=AppRoute::GitHub />

            <div class=css::githubBody>
                <Reveal motion=Motion::Down class=css::searchBox>
                    <div class=css::searchRow>
                        <TextInput
                            value=username
                            placeholder="Enter GitHub username..."
                            on_enter=move |()| search()
                        />
                        <Button on_click=move |_: MouseEvent| search() disabled=is_loading>
                            {move || {
                                if is_loading.get() {
                                    view! {
                                        <span class=css::spin><Icon icon=ic::SPINNER /></span>
                                        "Loading"
                                    }
                                    .into_any()
                                } else {
                                    view! { <Icon icon=ic::SEARCH /> "Search" }.into_any()
                                }
                            }}
                        </Button>
                    </div>
                    {move || state.with(|s| s.error().map(str::to_string)).map(|message| view! {
                        <StatusMessage kind=StatusKind::Error message=message />
                    })}
                </Reveal>

                {move || state.with(|s| s.profile().cloned()).map(|profile| view! {
                    <ProfileView profile=profile />
                })}
            </div>
        </div>
    }
}

#[component]
fn ProfileView(profile: GithubProfile) -> impl IntoView {
    let GithubProfile { user, repos } = profile;

    view! {
        <Reveal motion=Motion::Up class=css::profile>
            <UserCard user=user />
            {(!repos.is_empty()).then(move || view! {
                <section class=css::repoSection>
                    <h3 class=css::sectionTitle>"Recent Repositories"</h3>
                    <div class=css::repoList>
                        <For
                            each=move || repos.clone()
                            key=|repo| repo.id
                            children=|repo| view! { <RepoCard repo=repo /> }
                        />
                    </div>
                </section>
            })}
        </Reveal>
    }
}

#[component]
fn UserCard(user: GithubUser) -> impl IntoView {
    let display_name = user.display_name().to_string();
    let avatar_alt = display_name.clone();
    let handle = format!("@{}", user.login);
    let bio = user.bio().map(str::to_string);
    let location = user.location().map(str::to_string);
    // Unusable blog values (e.g. `javascript:`) are not linked at all
    let blog = user
        .blog()
        .and_then(|raw| normalize_external_url(raw).ok().map(|href| (href, raw.to_string())));

    view! {
        <div class=css::userCard>
            <img
                class=css::avatar
                src=user.avatar_url
                alt=avatar_alt
                width="120"
                height="120"
            />
            <div class=css::userInfo>
                <h2 class=css::userName>
                    <a href=user.html_url target="_blank" rel="noopener noreferrer">
                        {display_name}
                    </a>
                </h2>
                <p class=css::userLogin>{handle}</p>
                {bio.map(|bio| view! { <p class=css::userBio>{bio}</p> })}

                <div class=css::userMeta>
                    {location.map(|location| view! {
                        <span class=css::metaItem>
                            <Icon icon=ic::LOCATION />
                            <span>{location}</span>
                        </span>
                    })}
                    {blog.map(|(href, text)| view! {
                        <a class=css::metaLink href=href target="_blank" rel="noopener noreferrer">
                            <Icon icon=ic::LINK />
                            <span>{text}</span>
                        </a>
                    })}
                </div>

                <div class=css::userStats>
                    <span class=css::stat>
                        <Icon icon=ic::USERS />
                        <strong>{format_count(user.followers)}</strong>
                        " followers"
                    </span>
                    <span class=css::stat>
                        <strong>{format_count(user.following)}</strong>
                        " following"
                    </span>
                    <span class=css::stat>
                        <strong>{format_count(user.public_repos)}</strong>
                        " repositories"
                    </span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn RepoCard(repo: GithubRepo) -> impl IntoView {
    let description = repo.description().map(str::to_string);
    let language = repo.language().map(str::to_string);
    let updated = format!("Updated {}", display_date(&repo.updated_at));

    view! {
        <article class=css::repoCard>
            <a class=css::repoName href=repo.html_url target="_blank" rel="noopener noreferrer">
                <span>{repo.name}</span>
                <Icon icon=ic::EXTERNAL_LINK />
            </a>
            {description.map(|text| view! { <p class=css::repoDescription>{text}</p> })}
            <div class=css::repoMeta>
                {language.map(|language| view! {
                    <span class=css::metaItem>
                        <span class=css::languageDot></span>
                        {language}
                    </span>
                })}
                <span class=css::metaItem title="Stars">
                    <Icon icon=ic::STAR />
                    {format_count(repo.stargazers_count)}
                </span>
                <span class=css::metaItem title="Forks">
                    <Icon icon=ic::FORK />
                    {format_count(repo.forks_count)}
                </span>
                <span>{updated}</span>
            </div>
        </article>
    }
}
