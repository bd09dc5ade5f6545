use yew::prelude::*;

use crate::components::{
    mobile_bottom_nav::MobileBottomNav,
    nav::Nav,
    page_loader::PageLoader,
    quick_actions::FloatingActionButton,
    scroll_progress::ScrollProgress,
    scroll_top::ScrollTopButton,
};
use crate::config;
use crate::hooks::{use_anchor_smooth_scroll, use_theme, ScrollProvider};
use crate::scroll::Easing;
use crate::sections::{
    booking::Booking,
    footer::Footer,
    gallery::Gallery,
    hero::Hero,
    services::Services,
    social::Social,
    team::Team,
    testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <ScrollProvider>
            <Landing />
        </ScrollProvider>
    }
}

#[function_component(Landing)]
fn landing() -> Html {
    let theme = use_theme();
    use_anchor_smooth_scroll(Easing::EaseInOut, config::ANCHOR_SCROLL_MS);

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggled()))
    };

    html! {
        <div class="landing-page">
            <div class="aurora" style={format!("opacity: {};", theme.aurora_opacity())} aria-hidden="true"></div>
            <PageLoader />
            <ScrollProgress />
            <Nav theme={*theme} {on_toggle_theme} />
            <main>
                <Hero />
                <Services />
                <Gallery />
                <Testimonials />
                <Team />
                <Social />
                <Booking />
            </main>
            <Footer theme={*theme} />
            <MobileBottomNav />
            <FloatingActionButton />
            <ScrollTopButton />
            <style>
                {r#"
                    :root {
                        --primary: oklch(0.67 0.16 290);
                        --background: #fbf8f5;
                        --foreground: #1d1a22;
                        --card: rgba(255, 255, 255, 0.75);
                        --muted: rgba(29, 26, 34, 0.65);
                        --border: rgba(29, 26, 34, 0.1);
                    }

                    :root.dark {
                        --background: #141217;
                        --foreground: #f1edf5;
                        --card: rgba(30, 27, 36, 0.7);
                        --muted: rgba(241, 237, 245, 0.65);
                        --border: rgba(241, 237, 245, 0.1);
                    }

                    :root.lightbox-open body {
                        overflow: hidden;
                    }

                    body {
                        margin: 0;
                        background: var(--background);
                        color: var(--foreground);
                        font-family: 'Inter', system-ui, sans-serif;
                    }

                    .landing-page {
                        position: relative;
                        overflow-x: hidden;
                    }

                    .aurora {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        background: radial-gradient(circle at 20% 10%, var(--primary), transparent 45%),
                                    radial-gradient(circle at 80% 60%, #f3a683, transparent 40%);
                        filter: blur(80px);
                        z-index: -1;
                        transition: opacity 0.4s ease;
                    }

                    main > section {
                        padding: 6rem 1.5rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }

                    h2 {
                        font-size: clamp(2rem, 4vw, 3rem);
                        margin-bottom: 1rem;
                    }

                    .section-subtitle {
                        color: var(--muted);
                    }

                    /* entrance animations */
                    .entrance {
                        transition-property: opacity, transform, filter;
                        transition-timing-function: cubic-bezier(0.4, 0, 0.2, 1);
                        will-change: opacity, transform;
                    }

                    .entrance.is-pending {
                        opacity: 0;
                    }

                    .entrance.is-visible {
                        opacity: 1;
                        transform: none;
                        filter: none;
                    }

                    .entrance.is-blurred {
                        filter: blur(6px);
                        opacity: 0.6;
                    }

                    .entrance-fade-up.is-pending { transform: translateY(40px); }
                    .entrance-fade-down.is-pending { transform: translateY(-40px); }
                    .entrance-fade-left.is-pending { transform: translateX(40px); }
                    .entrance-fade-right.is-pending { transform: translateX(-40px); }
                    .entrance-zoom.is-pending { transform: scale(0.9); }
                    .entrance-blur.is-pending { filter: blur(12px); }

                    @media (prefers-reduced-motion: reduce) {
                        .entrance {
                            transition: none !important;
                        }
                    }

                    /* scroll progress */
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 1100;
                        pointer-events: none;
                    }

                    .scroll-progress-idle {
                        opacity: 0;
                    }

                    .scroll-progress-bar.glow {
                        box-shadow: 0 0 10px var(--primary);
                    }

                    /* top navigation */
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 1000;
                        backdrop-filter: blur(12px);
                        background: var(--card);
                        border-bottom: 1px solid var(--border);
                    }

                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0.75rem 1.5rem;
                    }

                    .nav-logo img {
                        height: 3rem;
                    }

                    .nav-links {
                        display: flex;
                        gap: 1.5rem;
                    }

                    .nav-link {
                        position: relative;
                        color: var(--muted);
                        text-decoration: none;
                    }

                    .nav-link.active {
                        color: var(--primary);
                    }

                    .nav-indicator {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: -0.4rem;
                        height: 2px;
                        background: var(--primary);
                    }

                    .burger-menu,
                    .nav-mobile-menu {
                        display: none;
                    }

                    @media (max-width: 1023px) {
                        .nav-links {
                            display: none;
                        }

                        .burger-menu {
                            display: block;
                        }

                        .nav-mobile-menu {
                            display: flex;
                            flex-direction: column;
                            padding: 1rem 1.5rem;
                        }

                        .nav-mobile-link.active {
                            color: var(--primary);
                        }
                    }

                    /* hero */
                    .hero {
                        min-height: 100vh;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        align-items: center;
                        gap: 3rem;
                    }

                    .hero-cards {
                        position: relative;
                        height: 28rem;
                    }

                    .hero-card {
                        position: absolute;
                        width: 14rem;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        transition: transform 0.8s cubic-bezier(0.4, 0, 0.2, 1), z-index 0.8s;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
                    }

                    .hero-cta,
                    .booking-cta {
                        display: inline-block;
                        padding: 0.9rem 2rem;
                        border-radius: 999px;
                        background: var(--primary);
                        color: white;
                        text-decoration: none;
                    }

                    .hero-secondary {
                        margin-left: 1rem;
                        color: var(--foreground);
                    }

                    @media (max-width: 1023px) {
                        .hero {
                            grid-template-columns: 1fr;
                        }
                    }

                    /* services, gallery, team */
                    .services-grid,
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 1.5rem;
                    }

                    .service-card,
                    .team-card,
                    .booking-card,
                    .testimonial {
                        background: var(--card);
                        border: 1px solid var(--border);
                        border-radius: 1.5rem;
                        padding: 1.5rem;
                    }

                    .service-card.focused {
                        border-color: var(--primary);
                    }

                    .service-price {
                        color: var(--primary);
                        font-weight: 600;
                    }

                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        grid-auto-rows: 12rem;
                        gap: 1rem;
                    }

                    .gallery-tile {
                        border: 0;
                        padding: 0;
                        border-radius: 1rem;
                        overflow: hidden;
                        cursor: zoom-in;
                    }

                    .gallery-tile img,
                    .hero-card img,
                    .team-card img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .tile-large { grid-column: span 2; grid-row: span 2; }
                    .tile-medium { grid-row: span 2; }

                    .typewriter-caret {
                        animation: blink 1s steps(1) infinite;
                    }

                    @keyframes blink {
                        50% { opacity: 0; }
                    }

                    /* tabs and embeds */
                    .tabs {
                        display: flex;
                        gap: 0.5rem;
                        margin-bottom: 1.5rem;
                    }

                    .tab {
                        border: 1px solid var(--border);
                        background: transparent;
                        color: inherit;
                        border-radius: 999px;
                        padding: 0.5rem 1.25rem;
                    }

                    .tab.active {
                        background: var(--primary);
                        color: white;
                    }

                    .embed-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                        gap: 1rem;
                    }

                    .embed-grid.hidden {
                        display: none;
                    }

                    .embed {
                        position: relative;
                        min-height: 28rem;
                    }

                    .embed-frame {
                        width: 100%;
                        height: 28rem;
                        border: 0;
                        opacity: 0;
                        transition: opacity 0.3s ease-in;
                    }

                    .embed-frame.loaded {
                        opacity: 1;
                    }

                    .embed-spinner,
                    .video-spinner,
                    .loader-spinner {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        border: 3px solid var(--border);
                        border-top-color: var(--primary);
                        animation: spin 0.8s linear infinite;
                    }

                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }

                    /* booking and footer */
                    .booking-grid,
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 2rem;
                    }

                    .site-footer {
                        padding: 3rem 1.5rem 6rem;
                        border-top: 1px solid var(--border);
                    }

                    .footer-copyright {
                        text-align: center;
                        color: var(--muted);
                    }

                    /* floating chrome */
                    .bottom-nav {
                        position: fixed;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        z-index: 900;
                        background: var(--card);
                        backdrop-filter: blur(12px);
                        transition: transform 0.3s ease;
                    }

                    .bottom-nav-hidden {
                        transform: translateY(110%);
                    }

                    .bottom-nav-inner {
                        display: flex;
                        justify-content: space-around;
                    }

                    .bottom-nav-item.active {
                        color: var(--primary);
                    }

                    @media (min-width: 1024px) {
                        .bottom-nav {
                            display: none;
                        }
                    }

                    .fab {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 5.5rem;
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 50%;
                        background: var(--primary);
                        color: white;
                        border: 0;
                        z-index: 950;
                        transition: opacity 0.3s ease, transform 0.3s ease;
                    }

                    .fab-hidden {
                        opacity: 0;
                        transform: scale(0.6);
                        pointer-events: none;
                    }

                    .sheet-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.4);
                        z-index: 1200;
                    }

                    .quick-action-sheet {
                        position: fixed;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        z-index: 1201;
                        background: var(--background);
                        border-radius: 1.5rem 1.5rem 0 0;
                        padding: 1.5rem;
                    }

                    .quick-action-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                    }

                    .scroll-top {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 950;
                        border-radius: 50%;
                        width: 3rem;
                        height: 3rem;
                        border: 1px solid var(--border);
                        background: var(--card);
                    }

                    /* lightbox */
                    .lightbox {
                        position: fixed;
                        inset: 0;
                        z-index: 1300;
                        background: rgba(0, 0, 0, 0.9);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .lightbox-figure img {
                        max-width: 90vw;
                        max-height: 80vh;
                        transition: transform 0.3s ease;
                    }

                    .lightbox-tools {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        display: flex;
                        gap: 0.5rem;
                    }

                    /* page loader */
                    .page-loader {
                        position: fixed;
                        inset: 0;
                        z-index: 2000;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: var(--background);
                        transition: opacity 0.5s ease;
                    }

                    .page-loader.fade-out {
                        opacity: 0;
                        pointer-events: none;
                    }

                    .loader-bar {
                        width: 12rem;
                        height: 4px;
                        background: var(--border);
                        overflow: hidden;
                    }

                    .loader-bar-fill {
                        height: 100%;
                        width: 40%;
                        background: var(--primary);
                        animation: loading 1.2s ease-in-out infinite;
                    }

                    @keyframes loading {
                        from { transform: translateX(-100%); }
                        to { transform: translateX(250%); }
                    }
                "#}
            </style>
        </div>
    }
}
