use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::accessibility::{use_accessibility, AccessibilitySettings};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::Card;
use crate::components::icon::{Icon, IconGlyph};
use crate::content;
use crate::motion::AnimationSpec;
use crate::Route;

/// Every testimonial card shows a full five-star row, whatever the source
/// data says.
pub const RATING_STARS: usize = 5;

/// Discrete navigation actions the landing page can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cta {
    SignIn,
    ElderEntry,
    CaregiverEntry,
    GetStarted,
}

pub fn cta_route(cta: Cta) -> Route {
    match cta {
        Cta::SignIn => Route::SignIn,
        Cta::ElderEntry => Route::ElderLogin,
        Cta::CaregiverEntry => Route::CaregiverLogin,
        // The closing CTA funnels into the elder flow.
        Cta::GetStarted => Route::ElderLogin,
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let navigator = use_navigator().unwrap();
    let accessibility = use_accessibility();
    let settings = accessibility.settings;
    let reduced = settings.reduced_motion;

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let go = |cta: Cta| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            navigator.push(&cta_route(cta));
        })
    };

    let toggle_motion = {
        let on_change = accessibility.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(AccessibilitySettings {
                reduced_motion: input.checked(),
                ..settings
            });
        })
    };

    let hero_motion = AnimationSpec::fade_up(reduced, 30.0, 0.6, 0.0);

    let page_class = classes!(
        "landing-page",
        settings.large_text.then_some("large-text"),
        settings.high_contrast.then_some("high-contrast"),
    );

    html! {
        <div class={page_class}>
            <header class="landing-header">
                <div class="header-inner">
                    <div class="brand">
                        <IconGlyph icon={Icon::Heart} size={36} class="brand-mark" />
                        <h1>{"MemoryCompanion"}</h1>
                    </div>
                    <nav class="landing-nav">
                        <a href="#features" class="nav-link">{"Features"}</a>
                        <a href="#testimonials" class="nav-link">{"Stories"}</a>
                        <label class="motion-toggle">
                            <input
                                type="checkbox"
                                checked={reduced}
                                onchange={toggle_motion}
                            />
                            {"Reduce motion"}
                        </label>
                        <Button variant={ButtonVariant::Ghost} onclick={go(Cta::SignIn)}>
                            {"Sign In"}
                        </Button>
                    </nav>
                </div>
            </header>

            <section class="hero">
                <div class="hero-inner" style={hero_motion.style()}>
                    <h2 class="hero-title">
                        {"A Caring Voice for"}
                        <span>{"Memory Support"}</span>
                    </h2>
                    <p class="hero-subtitle">
                        {"An AI companion designed specifically for seniors with dementia and their families. \
                          Simple voice interactions help with daily tasks, family recognition, and staying connected."}
                    </p>

                    <div class="hero-cta-group">
                        <Button
                            variant={ButtonVariant::Primary}
                            size={ButtonSize::ExtraLarge}
                            onclick={go(Cta::ElderEntry)}
                            class="hero-cta"
                        >
                            <IconGlyph icon={Icon::Heart} size={28} />
                            {"I Need Help Remembering"}
                            <IconGlyph icon={Icon::ArrowRight} size={24} />
                        </Button>
                        <Button
                            variant={ButtonVariant::Secondary}
                            size={ButtonSize::ExtraLarge}
                            onclick={go(Cta::CaregiverEntry)}
                            class="hero-cta"
                        >
                            <IconGlyph icon={Icon::Users} size={28} />
                            {"I'm a Caregiver"}
                            <IconGlyph icon={Icon::ArrowRight} size={24} />
                        </Button>
                    </div>

                    <div class="trust-row">
                        <span class="trust-badge demo-badge">{"🎯 DEMO MODE"}</span>
                        <span class="trust-badge">
                            <IconGlyph icon={Icon::Shield} size={24} class="trust-shield" />
                            {"HIPAA Compliant"}
                        </span>
                        <span class="trust-badge">
                            <IconGlyph icon={Icon::Heart} size={24} class="trust-heart" />
                            {"10,000+ Families Helped"}
                        </span>
                        <span class="trust-badge">
                            <IconGlyph icon={Icon::Star} size={24} class="trust-star" />
                            {"4.9/5 Rating"}
                        </span>
                    </div>
                </div>
            </section>

            <section id="features" class="features-section">
                <div class="section-inner">
                    <div class="section-heading">
                        <h3>{"Designed with Love and Care"}</h3>
                        <p>
                            {"Every feature is thoughtfully crafted for accessibility, simplicity, \
                              and the unique needs of seniors with dementia."}
                        </p>
                    </div>
                    <div class="feature-grid">
                        {
                            for content::features().iter().enumerate().map(|(index, feature)| {
                                let motion = AnimationSpec::fade_up(reduced, 20.0, 0.5, index as f32 * 0.1);
                                html! {
                                    <div key={feature.title} style={motion.style()}>
                                        <Card class="feature-card">
                                            <div class="feature-icon">
                                                <IconGlyph icon={feature.icon} size={32} />
                                            </div>
                                            <h4>{feature.title}</h4>
                                            <p>{feature.description}</p>
                                        </Card>
                                    </div>
                                }
                            })
                        }
                    </div>
                </div>
            </section>

            <section id="testimonials" class="testimonials-section">
                <div class="section-inner">
                    <div class="section-heading">
                        <h3>{"Real Stories from Real Families"}</h3>
                        <p>
                            {"Hear how MemoryCompanion has made a difference in the lives of \
                              seniors and their caregivers."}
                        </p>
                    </div>
                    <div class="testimonial-grid">
                        {
                            for content::testimonials().iter().enumerate().map(|(index, record)| {
                                let motion = AnimationSpec::fade_scale(reduced, 0.9, 0.5, index as f32 * 0.2);
                                html! {
                                    <div key={record.id} style={motion.style()}>
                                        <Card class="testimonial-card">
                                            <div class="testimonial-person">
                                                <img src={record.image} alt={record.name} loading="lazy" />
                                                <div>
                                                    <h4>{record.name}</h4>
                                                    <p>{record.role}</p>
                                                </div>
                                            </div>
                                            <blockquote>{format!("\u{201c}{}\u{201d}", record.quote)}</blockquote>
                                            <div class="rating-row">
                                                {
                                                    for (0..RATING_STARS).map(|star| html! {
                                                        <IconGlyph key={star} icon={Icon::Star} size={20} filled={true} />
                                                    })
                                                }
                                            </div>
                                        </Card>
                                    </div>
                                }
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="closing-cta">
                <div class="section-inner">
                    <h3>{"Start Your Journey Today"}</h3>
                    <p>
                        {"Join thousands of families who trust MemoryCompanion for \
                          compassionate memory support."}
                    </p>
                    <div class="closing-cta-group">
                        <Button
                            variant={ButtonVariant::Secondary}
                            size={ButtonSize::Large}
                            onclick={go(Cta::GetStarted)}
                        >
                            {"Get Started Now"}
                        </Button>
                        <Button variant={ButtonVariant::Ghost} size={ButtonSize::Large} class="inverse">
                            {"Schedule a Demo"}
                        </Button>
                    </div>
                </div>
            </section>

            <footer class="landing-footer">
                <div class="footer-brand">
                    <IconGlyph icon={Icon::Heart} size={32} class="brand-mark" />
                    <span>{"MemoryCompanion"}</span>
                </div>
                <p>{"Compassionate technology for memory support and family connection."}</p>
                <p>{"© 2024 MemoryCompanion. Made with love for seniors and their families."}</p>
            </footer>

            <style>
                {r#"
.landing-page {
    min-height: 100vh;
    background: linear-gradient(135deg, #eff6ff 0%, #f0fdf4 100%);
    color: #111827;
    font-size: 18px;
}

.landing-page.large-text {
    font-size: 22px;
}

.landing-page.high-contrast {
    background: #ffffff;
    color: #000000;
}

@keyframes fade-up {
    from {
        opacity: 0;
        transform: translateY(var(--rise, 20px));
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

@keyframes fade-scale {
    from {
        opacity: 0;
        transform: scale(var(--start-scale, 0.9));
    }
    to {
        opacity: 1;
        transform: scale(1);
    }
}

.landing-header {
    background: #ffffff;
    border-bottom: 1px solid #dbeafe;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.header-inner {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1.5rem 1rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
    flex-wrap: wrap;
    gap: 1rem;
}

.brand {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.brand h1 {
    font-size: 1.5rem;
    margin: 0;
}

.brand-mark {
    color: #2563eb;
}

.landing-nav {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}

.nav-link {
    color: #4b5563;
    text-decoration: none;
    font-size: 1.1rem;
    transition: color 0.2s;
}

.nav-link:hover {
    color: #2563eb;
}

.motion-toggle {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: #4b5563;
    font-size: 1rem;
    cursor: pointer;
}

.motion-toggle input {
    width: 1.2rem;
    height: 1.2rem;
}

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.75rem;
    border: 2px solid transparent;
    border-radius: 0.75rem;
    font-weight: 600;
    cursor: pointer;
    transition: background 0.2s, color 0.2s, box-shadow 0.2s;
}

.btn-md {
    padding: 0.5rem 1.25rem;
    font-size: 1rem;
}

.btn-lg {
    padding: 0.9rem 2rem;
    font-size: 1.15rem;
}

.btn-xl {
    padding: 1.25rem 2.5rem;
    font-size: 1.3rem;
    min-width: 280px;
}

.btn-primary {
    background: #2563eb;
    color: #ffffff;
}

.btn-primary:hover {
    background: #1d4ed8;
    box-shadow: 0 10px 20px rgba(37, 99, 235, 0.25);
}

.btn-secondary {
    background: #ffffff;
    color: #2563eb;
    border-color: #bfdbfe;
}

.btn-secondary:hover {
    border-color: #2563eb;
}

.btn-ghost {
    background: transparent;
    color: #4b5563;
}

.btn-ghost:hover {
    color: #2563eb;
}

.btn-ghost.inverse {
    color: #ffffff;
    border-color: #ffffff;
}

.btn-ghost.inverse:hover {
    background: #ffffff;
    color: #2563eb;
}

.hero {
    padding: 5rem 1rem;
    text-align: center;
}

.hero-inner {
    max-width: 960px;
    margin: 0 auto;
}

.hero-title {
    font-size: 3.5rem;
    line-height: 1.1;
    margin: 0 0 2rem;
}

.hero-title span {
    display: block;
    color: #2563eb;
}

.hero-subtitle {
    font-size: 1.5rem;
    color: #4b5563;
    line-height: 1.6;
    max-width: 820px;
    margin: 0 auto 3rem;
}

.hero-cta-group {
    display: flex;
    flex-wrap: wrap;
    gap: 1.5rem;
    justify-content: center;
    margin-bottom: 4rem;
}

.trust-row {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 2rem;
    color: #6b7280;
    font-size: 1.1rem;
}

.trust-badge {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.demo-badge {
    background: #dbeafe;
    color: #1e40af;
    font-weight: 600;
    padding: 0.5rem 1rem;
    border-radius: 0.5rem;
}

.trust-shield { color: #16a34a; }
.trust-heart { color: #ef4444; }
.trust-star { color: #eab308; }

.features-section {
    padding: 5rem 1rem;
    background: #ffffff;
}

.section-inner {
    max-width: 1100px;
    margin: 0 auto;
}

.section-heading {
    text-align: center;
    margin-bottom: 4rem;
}

.section-heading h3 {
    font-size: 2.25rem;
    margin: 0 0 1.5rem;
}

.section-heading p {
    font-size: 1.25rem;
    color: #4b5563;
    max-width: 720px;
    margin: 0 auto;
}

.feature-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 2rem;
}

.card {
    background: #ffffff;
    border: 1px solid #e5e7eb;
    border-radius: 1rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
    padding: 2rem;
    height: 100%;
}

.feature-card {
    text-align: center;
    transition: box-shadow 0.2s;
}

.feature-card:hover {
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
}

.feature-icon {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 4rem;
    height: 4rem;
    border-radius: 50%;
    background: #dbeafe;
    color: #2563eb;
    margin-bottom: 1.5rem;
}

.feature-card h4 {
    font-size: 1.25rem;
    margin: 0 0 1rem;
}

.feature-card p {
    color: #4b5563;
    line-height: 1.6;
    margin: 0;
}

.testimonials-section {
    padding: 5rem 1rem;
    background: #f9fafb;
}

.testimonial-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 2rem;
}

.testimonial-person {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1.5rem;
}

.testimonial-person img {
    width: 4rem;
    height: 4rem;
    border-radius: 50%;
    object-fit: cover;
    border: 2px solid #bfdbfe;
}

.testimonial-person h4 {
    font-size: 1.1rem;
    margin: 0;
}

.testimonial-person p {
    color: #4b5563;
    margin: 0;
}

.testimonial-card blockquote {
    font-style: italic;
    color: #374151;
    line-height: 1.6;
    margin: 0;
}

.rating-row {
    display: flex;
    gap: 0.25rem;
    color: #facc15;
    margin-top: 1rem;
}

.closing-cta {
    padding: 5rem 1rem;
    background: #2563eb;
    color: #ffffff;
    text-align: center;
}

.closing-cta h3 {
    font-size: 2.25rem;
    margin: 0 0 1.5rem;
}

.closing-cta p {
    font-size: 1.25rem;
    opacity: 0.9;
    margin: 0 0 3rem;
}

.closing-cta-group {
    display: flex;
    flex-wrap: wrap;
    gap: 1.5rem;
    justify-content: center;
}

.landing-footer {
    background: #111827;
    color: #9ca3af;
    text-align: center;
    padding: 3rem 1rem;
}

.footer-brand {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.75rem;
    color: #ffffff;
    font-size: 1.5rem;
    font-weight: 700;
    margin-bottom: 2rem;
}

.footer-brand .brand-mark {
    color: #60a5fa;
}

.landing-footer p {
    margin: 0 0 1rem;
}

@media (max-width: 768px) {
    .hero-title {
        font-size: 2.5rem;
    }

    .landing-nav .nav-link {
        display: none;
    }
}

@media (prefers-reduced-motion: reduce) {
    .landing-page * {
        animation: none !important;
        transition: none !important;
    }
}
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elder_cta_routes_to_elder_login() {
        assert_eq!(cta_route(Cta::ElderEntry), Route::ElderLogin);
    }

    #[test]
    fn caregiver_cta_routes_to_caregiver_login() {
        assert_eq!(cta_route(Cta::CaregiverEntry), Route::CaregiverLogin);
    }

    #[test]
    fn sign_in_and_get_started_routes() {
        assert_eq!(cta_route(Cta::SignIn), Route::SignIn);
        assert_eq!(cta_route(Cta::GetStarted), Route::ElderLogin);
    }

    #[test]
    fn rating_row_is_always_five_stars() {
        assert_eq!(RATING_STARS, 5);
    }
}
