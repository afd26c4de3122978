use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::{contact::ContactSection, typing::TypingText, use_profile};
use crate::content::{build_year, EducationEntry, ProfileData, ProjectEntry, SocialLink};
use crate::nav::Section;

#[component]
pub fn HomePage() -> impl IntoView {
    let profile = use_profile();
    view! {
        <Title text="Portfolio" />
        <div class="pt-20">
            {Section::ORDER
                .into_iter()
                .map(|section| render_section(section, profile))
                .collect_view()}
        </div>
        <Footer />
    }
}

fn render_section(section: Section, profile: &'static ProfileData) -> AnyView {
    let id = section.anchor();
    match section {
        Section::Hero => view! { <Hero id role=profile.role.clone() /> }.into_any(),
        Section::About => view! { <About id profile /> }.into_any(),
        Section::Skills => view! { <Skills id skills=profile.skills.clone() /> }.into_any(),
        Section::Projects => {
            view! { <Projects id projects=profile.projects.clone() /> }.into_any()
        }
        Section::Education => {
            view! { <Education id entries=profile.education.clone() /> }.into_any()
        }
        Section::Resume => view! { <Resume id href=profile.resume.clone() /> }.into_any(),
        Section::Contact => view! { <ContactSection id /> }.into_any(),
        Section::Social => view! { <Social id links=profile.socials.clone() /> }.into_any(),
    }
}

#[component]
fn Hero(id: &'static str, role: String) -> impl IntoView {
    view! {
        <section id=id class="text-center py-24 px-4">
            <h2 class="text-3xl md:text-5xl font-bold text-blue-400 animate-drop-in">{role}</h2>
        </section>
    }
}

#[component]
fn About(id: &'static str, profile: &'static ProfileData) -> impl IntoView {
    view! {
        <section id=id class="max-w-5xl mx-auto text-center px-6 py-16">
            <h3 class="text-2xl font-semibold border-b border-gray-700 inline-block mb-6">
                "About Me"
            </h3>
            <div class="flex flex-col md:flex-row items-center gap-10">
                <img
                    src=profile.profile_image.clone()
                    alt="profile"
                    class="w-40 h-40 rounded-full border-4 border-blue-500 object-cover"
                />
                <div class="text-center md:text-left">
                    <TypingText
                        phrases=profile.taglines.clone()
                        text_class="text-xl md:text-2xl font-bold text-blue-400"
                    />
                    {profile
                        .about
                        .split("\n\n")
                        .map(|para| {
                            view! {
                                <p class="text-gray-400 leading-relaxed mt-4">{para.to_string()}</p>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Skills(id: &'static str, skills: Vec<String>) -> impl IntoView {
    view! {
        <section id=id class="max-w-5xl mx-auto text-center px-6 py-16">
            <h3 class="text-2xl font-semibold mb-8 border-b border-gray-700 inline-block">
                "Skills 🚀"
            </h3>
            <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6 text-center">
                {skills
                    .into_iter()
                    .map(|skill| {
                        view! {
                            <div class="cursor-pointer text-xl font-bold py-4 rounded-lg border border-gray-800 bg-gray-900 transition-transform duration-200 hover:scale-115">
                                <span class="gradient-text">{skill}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Projects(id: &'static str, projects: Vec<ProjectEntry>) -> impl IntoView {
    view! {
        <section id=id class="max-w-5xl text-center mx-auto px-6 py-16">
            <h3 class="text-2xl font-semibold mb-6 border-b border-gray-700 inline-block">
                "Projects"
            </h3>
            <div class="grid gap-6 md:grid-cols-2">
                {projects.into_iter().map(|p| view! { <ProjectCard project=p /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    let ProjectEntry {
        title,
        description,
        image,
        link,
    } = project;
    view! {
        <div class="bg-gray-900 rounded-xl shadow-lg border border-gray-800 overflow-hidden transition-transform duration-200 hover:scale-[1.04]">
            <img src=image alt=title.clone() class="w-full h-48 object-cover" />
            <div class="p-5">
                <h4 class="text-lg font-bold text-blue-400">{title}</h4>
                <p class="text-gray-400 mb-4">{description}</p>
                <a
                    href=link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-blue-400 hover:underline"
                >
                    "View Project →"
                </a>
            </div>
        </div>
    }
}

#[component]
fn Education(id: &'static str, entries: Vec<EducationEntry>) -> impl IntoView {
    view! {
        <section id=id class="py-20 px-5 text-center">
            <h2 class="text-2xl font-semibold mb-4">"Education 🎓"</h2>
            <div class="max-w-3xl mx-auto space-y-6">
                {entries
                    .into_iter()
                    .map(|e| {
                        view! {
                            <div class="border border-gray-300 rounded-xl p-6 hover:scale-[1.02] transition-all duration-300 shadow-lg">
                                <h3 class="gradient-text text-2xl font-semibold">{e.degree}</h3>
                                <p class="text-gray-500 mt-2 font-semibold">{e.institution}</p>
                                <p class="mt-2 font-medium">{e.period}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Resume(id: &'static str, href: String) -> impl IntoView {
    view! {
        <section id=id class="text-center py-16">
            <h3 class="text-2xl font-semibold mb-4">"Resume"</h3>
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class="bg-blue-500 text-white px-6 py-3 rounded-lg hover:bg-blue-600 transition"
            >
                "📄 View / Download Resume"
            </a>
        </section>
    }
}

#[component]
fn Social(id: &'static str, links: Vec<SocialLink>) -> impl IntoView {
    view! {
        <section id=id class="flex flex-col items-center gap-4 py-10">
            <h3 class="text-xl font-semibold text-blue-400">"Connect With Me"</h3>
            <div class="flex gap-6">
                {links
                    .into_iter()
                    .map(|link| {
                        let label = link.label.clone();
                        view! {
                            <a
                                href=link.url
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=label.clone()
                                class="text-3xl hover:text-blue-400 transition transform hover:scale-125"
                            >
                                {match link.icon {
                                    Some(icon) => Either::Left(view! { <i class=icon></i> }),
                                    None => Either::Right(label),
                                }}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let profile = use_profile();
    let year = build_year().map(|y| format!("{y} ")).unwrap_or_default();
    view! {
        <footer class="text-center py-6 border-t border-gray-800 text-gray-500">
            {format!("© {year}{} — Built with ❤️", profile.name)}
        </footer>
    }
}
