use yew::prelude::*;

struct Card {
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Card; 3] = [
    Card {
        title: "Field Data",
        body: "Eighteen months of sensor readings collected across three test sites.",
    },
    Card {
        title: "Open Tooling",
        body: "Every pipeline stage is scripted and reproducible from the raw archive.",
    },
    Card {
        title: "Peer Review",
        body: "Findings were checked by two independent groups before publication.",
    },
];

const STEPS: [Card; 4] = [
    Card { title: "Collect", body: "Sample the sites on a fixed weekly rota." },
    Card { title: "Clean", body: "Drop faulty readings and align timestamps." },
    Card { title: "Model", body: "Fit the seasonal model per site." },
    Card { title: "Compare", body: "Test the fitted models against the holdout year." },
];

const ACHIEVEMENTS: [(&str, &str); 3] = [
    ("42%", "less variance than the baseline model"),
    ("3", "sites covered with one shared model"),
    ("0", "manual steps between raw data and figures"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <div class="custom-cursor"></div>
            <div class="gradient-orb orb-one"></div>
            <div class="gradient-orb orb-two"></div>

            <header id="home" class="hero">
                <div class="hero-background"></div>
                <div class="overlay"></div>
                <div class="hero-content">
                    <h1 class="hero-title">{"Seasonal Patterns, Measured"}</h1>
                    <p class="hero-subtitle">
                        {"A small study on what a year of careful measurement can tell you."}
                    </p>
                    <a href="#abstract" class="cta-button">{"Read the abstract"}</a>
                </div>
            </header>

            <section id="abstract" class="section">
                <div class="section-content">
                    <h2>{"Abstract"}</h2>
                    <p>
                        {"We measured three sites for a full year and fitted one seasonal model to all of them. \
                          The shared model explains most of the variation without per-site tuning."}
                    </p>
                </div>
                <div class="features-grid">
                    {
                        FEATURES.iter().map(|card| html! {
                            <div class="feature-card">
                                <h3>{card.title}</h3>
                                <p>{card.body}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="methods" class="section">
                <div class="parallax-element layer-one"></div>
                <div class="section-content">
                    <h2>{"Methods"}</h2>
                </div>
                <div class="steps">
                    {
                        STEPS.iter().enumerate().map(|(i, step)| html! {
                            <div class="step">
                                <span class="step-number">{(i + 1).to_string()}</span>
                                <h3>{step.title}</h3>
                                <p>{step.body}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="results" class="section">
                <div class="parallax-element layer-two"></div>
                <div class="section-content">
                    <h2>{"Results"}</h2>
                </div>
                <div class="achievements stagger-container">
                    {
                        ACHIEVEMENTS.iter().map(|(figure, label)| html! {
                            <div class="achievement animate-item">
                                <strong>{*figure}</strong>
                                <p>{*label}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="acknowledgment" class="section">
                <div class="section-content">
                    <h2>{"Acknowledgment"}</h2>
                    <p>{"Thanks to the site owners who let us in every week, rain or not."}</p>
                </div>
                <div class="enhancement">
                    <p>{"Data and scripts are available on request."}</p>
                </div>
            </section>

            <button id="scrollTopBtn" class="scroll-top" aria-label="Back to top">{"↑"}</button>

            <style>
                {r#"
                :root {
                    --bg: #111318;
                    --text: #f2f2f2;
                    --text-accent: #7EB2FF;
                    --card: rgba(255, 255, 255, 0.05);
                }
                body.light-mode {
                    --bg: #fafafa;
                    --text: #1a1a1a;
                    --text-accent: #1E90FF;
                    --card: rgba(0, 0, 0, 0.04);
                }
                body {
                    margin: 0;
                    background: var(--bg);
                    color: var(--text);
                    transition: background 0.3s ease, color 0.3s ease;
                }

                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 80px;
                    z-index: 100;
                    backdrop-filter: blur(10px);
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    height: 100%;
                    padding: 0 2rem;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                }
                .nav-link, .nav-logo {
                    color: var(--text);
                    text-decoration: none;
                    opacity: 0.7;
                }
                .nav-link.active {
                    opacity: 1;
                    color: var(--text-accent);
                }
                .burger-menu {
                    display: none;
                }
                .theme-toggle {
                    background: none;
                    border: none;
                    font-size: 1.2rem;
                    cursor: pointer;
                }
                .scroll-progress {
                    height: 3px;
                    width: 0;
                    background: var(--text-accent);
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: -20% 0 0 0;
                    background: radial-gradient(circle at 30% 30%, #1E90FF33, transparent 60%);
                }
                .overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, transparent, var(--bg));
                }
                .hero-content {
                    position: relative;
                    text-align: center;
                }
                .hero-title {
                    font-size: 3.5rem;
                    min-height: 1.2em;
                }
                .cta-button {
                    display: inline-block;
                    padding: 0.8rem 1.6rem;
                    border-radius: 2rem;
                    background: var(--text-accent);
                    color: #fff;
                    text-decoration: none;
                }

                .section {
                    position: relative;
                    padding: 6rem 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .features-grid, .steps, .achievements {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }
                .feature-card, .step, .achievement, .enhancement {
                    background: var(--card);
                    border-radius: 1rem;
                    padding: 1.5rem;
                }
                .animate-item {
                    opacity: 0;
                    transform: translateY(30px) scale(0.95);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .parallax-element {
                    position: absolute;
                    width: 240px;
                    height: 240px;
                    border-radius: 50%;
                    filter: blur(60px);
                    background: #7EB2FF22;
                    z-index: -1;
                }

                .gradient-orb {
                    position: fixed;
                    width: 300px;
                    height: 300px;
                    border-radius: 50%;
                    filter: blur(80px);
                    pointer-events: none;
                    z-index: -1;
                }
                .orb-one { top: 10%; left: 5%; background: #1E90FF22; }
                .orb-two { bottom: 10%; right: 5%; background: #7EB2FF22; }
                .custom-cursor {
                    position: fixed;
                    width: 12px;
                    height: 12px;
                    margin: -6px 0 0 -6px;
                    border-radius: 50%;
                    background: var(--text-accent);
                    pointer-events: none;
                    z-index: 1000;
                }

                .scroll-top {
                    position: fixed;
                    right: 2rem;
                    bottom: 2rem;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                }
                .scroll-top.visible {
                    opacity: 1;
                    pointer-events: auto;
                }

                .loading-overlay {
                    position: fixed;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--bg);
                    z-index: 2000;
                    transition: opacity 0.5s ease;
                }
                .spinner {
                    width: 40px;
                    height: 40px;
                    border: 3px solid var(--card);
                    border-top-color: var(--text-accent);
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                @keyframes blink {
                    50% { border-color: transparent; }
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 80px;
                        right: 0;
                        left: 0;
                        background: var(--bg);
                        padding: 1rem;
                    }
                    .hero-title {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
