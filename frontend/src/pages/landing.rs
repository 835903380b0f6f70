use chrono::Datelike;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::components::cta::{CtaButton, ScrollTarget};
use crate::components::lead_form::LeadForm;
use crate::components::reveal::AnimatedSection;
use crate::config;

struct Stat {
    value: &'static str,
    label: &'static str,
    note: &'static str,
}

static STATS: [Stat; 4] = [
    Stat { value: "$500M+", label: "Total Recovered", note: "Since 2010" },
    Stat { value: "$2.3M", label: "Largest Settlement", note: "Truck Accident Case" },
    Stat { value: "15,000+", label: "Cases Won", note: "98% Success Rate" },
    Stat { value: "$125K", label: "Average Settlement", note: "Car Accident Cases" },
];

/// Icon, title and body for the step, checklist and network cards.
struct Card {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

static STEPS: [Card; 3] = [
    Card {
        icon: "📝",
        title: "Step 1: Fill Out Form",
        body: "Complete our 2-minute eligibility form with basic details about your accident and injuries.",
    },
    Card {
        icon: "🤝",
        title: "Step 2: Get Matched",
        body: "We connect you with a trusted local attorney who specializes in your type of case.",
    },
    Card {
        icon: "⚖️",
        title: "Step 3: Free Consultation",
        body: "Schedule a free consultation to discuss your case and potential compensation.",
    },
];

static CHECKLIST: [Card; 4] = [
    Card { icon: "📅", title: "Recent Accident", body: "Was the accident within the last 12 months?" },
    Card { icon: "❤️", title: "Injuries Sustained", body: "Were you injured or experienced trauma?" },
    Card { icon: "⚠️", title: "Not At Fault", body: "Not at fault or partially at fault?" },
    Card { icon: "💵", title: "Financial Impact", body: "Missed work or had financial losses?" },
];

static NETWORK: [Card; 3] = [
    Card { icon: "🏅", title: "Board Certified", body: "All attorneys are board-certified in personal injury law" },
    Card { icon: "👥", title: "10+ Years Experience", body: "Average of 15+ years specializing in accident cases" },
    Card { icon: "🛡️", title: "Proven Track Record", body: "$500M+ recovered for clients nationwide" },
];

struct Testimonial {
    quote: &'static str,
    initials: &'static str,
    name: &'static str,
    role: &'static str,
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "I didn't know I could claim until I found Accident.Ink. The process was so easy and I got $42,000 in damages. Forever grateful!",
        initials: "AR",
        name: "Amanda R.",
        role: "Car Accident Victim",
    },
    Testimonial {
        quote: "The attorney they connected me with was amazing. He fought for me and got me the compensation I deserved. No upfront costs!",
        initials: "MJ",
        name: "Michael J.",
        role: "Truck Accident Survivor",
    },
    Testimonial {
        quote: "Fast, professional, and caring. They made a difficult time much easier. I received excellent legal representation.",
        initials: "SL",
        name: "Sarah L.",
        role: "Motorcycle Accident",
    },
];

struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

static FAQ: [FaqEntry; 5] = [
    FaqEntry {
        question: "How much does it cost to hire a personal injury attorney?",
        answer: "Nothing upfront! Our attorneys work on a contingency fee basis, meaning you only pay if we win your case. There are no hidden fees or surprise costs.",
    },
    FaqEntry {
        question: "How long do I have to file a personal injury claim?",
        answer: "The statute of limitations varies by state, typically ranging from 1-3 years. It's crucial to act quickly to preserve evidence and protect your rights. Contact us today for a free consultation.",
    },
    FaqEntry {
        question: "What if I was partially at fault for the accident?",
        answer: "You may still be entitled to compensation even if you were partially at fault. Many states follow comparative negligence laws, allowing you to recover damages reduced by your percentage of fault.",
    },
    FaqEntry {
        question: "What types of damages can I recover?",
        answer: "You may be entitled to medical expenses, lost wages, pain and suffering, property damage, and future medical costs. Our attorneys will fight to maximize your compensation.",
    },
    FaqEntry {
        question: "How long does a personal injury case take?",
        answer: "Case duration varies depending on complexity, severity of injuries, and willingness to settle. Simple cases may resolve in months, while complex cases can take 1-2 years. We'll keep you informed throughout the process.",
    },
];

/// Sibling cards come in 100ms apart, starting after the section heading.
fn stagger(index: usize) -> u32 {
    (index as u32 + 1) * 100
}

fn section_heading(title: &'static str, subtitle: &'static str) -> Html {
    html! {
        <AnimatedSection class="section-heading">
            <h2>{ title }</h2>
            <p>{ subtitle }</p>
        </AnimatedSection>
    }
}

fn card_grid(cards: &[Card], class: &'static str) -> Html {
    html! {
        <div class={classes!("card-grid", class)}>
            { for cards.iter().enumerate().map(|(i, card)| html! {
                <AnimatedSection delay={stagger(i)} class="card">
                    <div class="card-icon">{ card.icon }</div>
                    <h3>{ card.title }</h3>
                    <p>{ card.body }</p>
                </AnimatedSection>
            }) }
        </div>
    }
}

fn trust_badges(items: [(&'static str, &'static str); 3]) -> Html {
    html! {
        <div class="trust-badges">
            { for items.iter().map(|(icon, text)| html! {
                <span class="trust-badge">{ format!("{} {}", icon, text) }</span>
            }) }
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_title(format!("{} | {}", config::BRAND_NAME, config::TAGLINE));

    // One handle for the whole page; every CTA scrolls to the same section
    let scroll_target = (*use_state(ScrollTarget::default)).clone();
    let year = chrono::Local::now().year();

    html! {
        <ContextProvider<ScrollTarget> context={scroll_target.clone()}>
        <div class="landing-page">
            <header class="site-header">
                <div class="header-content">
                    <div class="brand">
                        <div class="brand-mark">{"⚖️"}</div>
                        <div>
                            <h1>{ config::BRAND_NAME }</h1>
                            <p>{ config::TAGLINE }</p>
                        </div>
                    </div>
                    <a href={config::PHONE_HREF} class="header-phone">
                        {"📞 "}{ config::PHONE_DISPLAY }
                    </a>
                </div>
            </header>

            <section class="hero">
                <div class="hero-background">
                    <img src={config::HERO_IMAGE_URL} alt="Car accident scene with emergency response" />
                    <div class="hero-overlay"></div>
                </div>
                <div class="hero-content">
                    <AnimatedSection>
                        <h2 class="hero-title">
                            <span>{"Injured in a Car Accident?"}</span>{" "}
                            <span class="hero-highlight">{"You May Be Eligible for Compensation."}</span>
                        </h2>
                    </AnimatedSection>
                    <AnimatedSection delay={200}>
                        <p class="hero-subtitle">
                            {"Get connected with top personal injury attorneys in minutes. No upfront costs, no obligation."}
                        </p>
                    </AnimatedSection>
                    <AnimatedSection delay={400} class="hero-cta-group">
                        <CtaButton label="Check My Eligibility" class="hero-cta">
                            <span class="arrow">{"→"}</span>
                        </CtaButton>
                        <a href={config::PHONE_HREF} class="hero-call">
                            { format!("📞 Call Now: {}", config::PHONE_DISPLAY) }
                        </a>
                    </AnimatedSection>
                    <AnimatedSection delay={600}>
                        { trust_badges([("✅", "100% Free Evaluation"), ("🛡️", "No Win, No Fee"), ("🕒", "24/7 Support")]) }
                    </AnimatedSection>
                </div>
            </section>

            <section class="stats-section">
                { section_heading("Millions Recovered for Our Clients", "Real results from real cases across the United States") }
                <div class="card-grid stats-grid">
                    { for STATS.iter().enumerate().map(|(i, stat)| html! {
                        <AnimatedSection delay={stagger(i)} class="stat">
                            <div class="stat-value">{ stat.value }</div>
                            <div class="stat-label">{ stat.label }</div>
                            <div class="stat-note">{ stat.note }</div>
                        </AnimatedSection>
                    }) }
                </div>
                <AnimatedSection delay={500} class="stats-footer">
                    <p>{"Every case is unique. Past results do not guarantee future outcomes."}</p>
                    <CtaButton label="See What Your Case Is Worth" />
                </AnimatedSection>
            </section>

            <section class="steps-section">
                { section_heading("How It Works", "Get connected with the right attorney in three simple steps") }
                { card_grid(&STEPS, "steps-grid") }
            </section>

            <section class="checklist-section">
                { section_heading("Am I Eligible?", "Check if you qualify for compensation") }
                { card_grid(&CHECKLIST, "checklist-grid") }
            </section>

            <section class="testimonials-section">
                { section_heading("What Our Clients Say", "Real stories from real people we've helped") }
                <div class="card-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <AnimatedSection delay={stagger(i)} class="card testimonial">
                            <div class="stars" aria-label="5 stars">{"★★★★★"}</div>
                            <p class="quote">{ format!("\"{}\"", t.quote) }</p>
                            <div class="author">
                                <span class="avatar">{ t.initials }</span>
                                <div>
                                    <h4>{ t.name }</h4>
                                    <p>{ t.role }</p>
                                </div>
                            </div>
                        </AnimatedSection>
                    }) }
                </div>
            </section>

            <section class="network-section">
                { section_heading(
                    "Trusted Attorney Network",
                    "Our network includes board-certified attorneys with 10+ years of experience in personal injury law",
                ) }
                { card_grid(&NETWORK, "network-grid") }
                <AnimatedSection delay={400}>
                    { trust_badges([("✅", "No Win, No Fee"), ("🛡️", "Confidential"), ("🕒", "24/7 Support")]) }
                </AnimatedSection>
            </section>

            <section class="faq-section">
                { section_heading("Frequently Asked Questions", "Get answers to common questions about personal injury claims") }
                <div class="faq-list">
                    { for FAQ.iter().enumerate().map(|(i, entry)| html! {
                        <AnimatedSection delay={stagger(i)} class="faq-item">
                            <h3>{ entry.question }</h3>
                            <p>{ entry.answer }</p>
                        </AnimatedSection>
                    }) }
                </div>
            </section>

            <section id={config::FORM_ANCHOR_ID} ref={scroll_target.node()} class="form-section">
                <AnimatedSection class="section-heading">
                    <h2>{"Don't Wait - Act Now"}</h2>
                    <p>{"Time limits may apply to your case. Get your free consultation today."}</p>
                </AnimatedSection>
                <AnimatedSection delay={200}>
                    <LeadForm />
                </AnimatedSection>
            </section>

            <footer class="site-footer">
                <AnimatedSection class="footer-grid">
                    <div>
                        <h3>{ format!("⚖️ {}", config::BRAND_NAME) }</h3>
                        <p class="footer-tagline">{ config::TAGLINE }</p>
                        <p>{"Connecting accident victims with experienced personal injury attorneys across the United States."}</p>
                        <p>{"📞 "}{ config::PHONE_DISPLAY }</p>
                    </div>
                    <div>
                        <h4>{"Legal Resources"}</h4>
                        <ul class="footer-links">
                            <li><a href="#">{"Privacy Policy"}</a></li>
                            <li><a href="#">{"Terms of Service"}</a></li>
                            <li><a href="#">{"Legal Disclaimer"}</a></li>
                            <li><a href={format!("#{}", config::FORM_ANCHOR_ID)}>{"Free Case Review"}</a></li>
                        </ul>
                    </div>
                    <div class="footer-help">
                        <h4>{"Get Help Today"}</h4>
                        <a href={config::PHONE_HREF} class="footer-phone">{ config::PHONE_DISPLAY }</a>
                        <p>{"Free Consultation Available"}</p>
                        <CtaButton label="Start My Case Now" />
                        <p class="footer-note">{"Takes 60 seconds • No obligation"}</p>
                    </div>
                </AnimatedSection>
                <AnimatedSection delay={200} class="footer-legal">
                    <p>{ format!("© {} {}. All rights reserved.", year, config::BRAND_NAME) }</p>
                    <p>{"Attorney Advertising. Prior results do not guarantee a similar outcome."}</p>
                </AnimatedSection>
            </footer>

            <ChatWidget />

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #ffffff;
                    color: #111827;
                    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(2rem);
                    transition: opacity 1000ms ease-out, transform 1000ms ease-out;
                }

                .reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: #ffffff;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .header-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .brand-mark {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 0.5rem;
                    background: #2563eb;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .brand h1 {
                    font-size: 1.5rem;
                    margin: 0;
                }

                .brand p {
                    font-size: 0.75rem;
                    color: #4b5563;
                    margin: 0;
                }

                .header-phone {
                    color: #2563eb;
                    font-weight: 600;
                    text-decoration: none;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    padding: 8rem 0;
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }

                .hero-background img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, rgba(17, 24, 39, 0.9), rgba(30, 58, 138, 0.7));
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                    text-align: center;
                    color: #ffffff;
                }

                .hero-title {
                    font-size: clamp(2.25rem, 5vw, 4rem);
                    font-weight: 800;
                    line-height: 1.1;
                }

                .hero-highlight {
                    color: #fbbf24;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #e5e7eb;
                    margin: 1.5rem 0 2rem;
                }

                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }

                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #2563eb;
                    color: #ffffff;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 1rem 2rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.2s ease, transform 0.2s ease;
                }

                .cta-button:hover {
                    background: #1d4ed8;
                    transform: scale(1.03);
                }

                .hero-call {
                    display: inline-flex;
                    align-items: center;
                    padding: 1rem 2rem;
                    border: 2px solid #ffffff;
                    border-radius: 0.5rem;
                    color: #ffffff;
                    font-weight: 600;
                    text-decoration: none;
                }

                .trust-badges {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-top: 2rem;
                }

                .trust-badge {
                    font-size: 0.95rem;
                    font-weight: 500;
                }

                section {
                    padding: 5rem 2rem;
                }

                .stats-section,
                .checklist-section,
                .network-section {
                    background: #f9fafb;
                }

                .section-heading {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                }

                .section-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                }

                .section-heading p {
                    color: #4b5563;
                    font-size: 1.125rem;
                }

                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr));
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .card,
                .stat {
                    background: #ffffff;
                    border-radius: 0.75rem;
                    padding: 2rem;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
                }

                .card-icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }

                .stat {
                    text-align: center;
                }

                .stat-value {
                    font-size: 2.5rem;
                    font-weight: 800;
                    color: #16a34a;
                }

                .stat-label {
                    font-weight: 600;
                    margin-top: 0.5rem;
                }

                .stat-note {
                    color: #6b7280;
                    font-size: 0.875rem;
                }

                .stats-footer {
                    text-align: center;
                    margin-top: 3rem;
                }

                .stats-footer p {
                    color: #6b7280;
                    font-style: italic;
                    margin-bottom: 1.5rem;
                }

                .stars {
                    color: #f59e0b;
                    letter-spacing: 0.15rem;
                    margin-bottom: 1rem;
                }

                .quote {
                    color: #374151;
                    font-style: italic;
                }

                .author {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }

                .author h4,
                .author p {
                    margin: 0;
                }

                .avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: #dbeafe;
                    color: #1d4ed8;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .faq-list {
                    max-width: 48rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .faq-item {
                    border-bottom: 1px solid #e5e7eb;
                    padding-bottom: 1.5rem;
                }

                .faq-item h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                }

                .faq-item p {
                    color: #4b5563;
                }

                .form-section {
                    background: linear-gradient(135deg, #1e3a8a, #1e40af);
                    color: #ffffff;
                }

                .form-section .section-heading p {
                    color: #dbeafe;
                }

                .lead-form-card {
                    max-width: 42rem;
                    margin: 0 auto;
                    background: #ffffff;
                    color: #111827;
                    border-radius: 1rem;
                    padding: 2.5rem;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25);
                }

                .lead-form-card h3 {
                    text-align: center;
                    font-size: 1.5rem;
                    margin-bottom: 1.5rem;
                }

                .lead-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .form-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                    gap: 1rem;
                }

                .form-input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    font-size: 1rem;
                }

                .form-input:focus {
                    outline: none;
                    border-color: #2563eb;
                    box-shadow: 0 0 0 2px rgba(37, 99, 235, 0.3);
                }

                .form-input.invalid {
                    border-color: #dc2626;
                }

                .form-errors {
                    background: #fef2f2;
                    color: #b91c1c;
                    border-radius: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    margin-bottom: 1rem;
                }

                .submit-button {
                    background: #16a34a;
                    color: #ffffff;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 1rem;
                    font-size: 1.125rem;
                    font-weight: 700;
                    cursor: pointer;
                }

                .submit-button:hover {
                    background: #15803d;
                }

                .form-note {
                    text-align: center;
                    color: #6b7280;
                    font-size: 0.875rem;
                    margin-top: 1rem;
                }

                .site-footer {
                    background: #111827;
                    color: #d1d5db;
                    padding: 4rem 2rem 2rem;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .site-footer h3,
                .site-footer h4 {
                    color: #ffffff;
                }

                .footer-links {
                    list-style: none;
                    padding: 0;
                }

                .footer-links a,
                .footer-phone {
                    color: #d1d5db;
                    text-decoration: none;
                }

                .footer-legal {
                    border-top: 1px solid #374151;
                    margin-top: 3rem;
                    padding-top: 2rem;
                    text-align: center;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }

                .chat-toggle {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 60;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    border: none;
                    background: #2563eb;
                    color: #ffffff;
                    font-size: 1.5rem;
                    cursor: pointer;
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.25);
                }

                .chat-panel {
                    position: fixed;
                    bottom: 6rem;
                    right: 1.5rem;
                    z-index: 60;
                    width: 20rem;
                    background: #ffffff;
                    border-radius: 0.75rem;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25);
                    overflow: hidden;
                }

                .chat-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: #2563eb;
                    color: #ffffff;
                    padding: 0.75rem 1rem;
                }

                .chat-header h4 {
                    margin: 0;
                }

                .chat-close {
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-size: 1.25rem;
                    cursor: pointer;
                }

                .chat-body {
                    padding: 1rem;
                }

                .chat-greeting {
                    background: #f3f4f6;
                    border-radius: 0.5rem;
                    padding: 0.75rem;
                    font-size: 0.875rem;
                }

                .chat-input-row {
                    display: flex;
                    gap: 0.5rem;
                }

                .chat-input-row input {
                    flex: 1;
                    padding: 0.5rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.375rem;
                }

                .chat-send {
                    background: #2563eb;
                    color: #ffffff;
                    border: none;
                    border-radius: 0.375rem;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                }

                @media (max-width: 640px) {
                    .header-content {
                        padding: 1rem;
                    }

                    .brand p {
                        display: none;
                    }

                    section {
                        padding: 3.5rem 1rem;
                    }

                    .lead-form-card {
                        padding: 1.5rem;
                    }

                    .chat-panel {
                        right: 1rem;
                        left: 1rem;
                        width: auto;
                    }
                }
                "#}
            </style>
        </div>
        </ContextProvider<ScrollTarget>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_stagger_after_the_heading() {
        let delays: Vec<u32> = (0..4).map(stagger).collect();
        assert_eq!(delays, vec![100, 200, 300, 400]);
    }
}
