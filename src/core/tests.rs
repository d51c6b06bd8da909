#[cfg(test)]
mod tests {
    use crate::core::{
        CONTACT_FORM, ContactForm, DisclosureGroup, DismissTicket, FormBuffer, ParticleRanges,
        SelectionCursor, SiteConfig, content, generate,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::task::JoinHandle;

    fn fill_contact(buffer: &mut FormBuffer, name: &str, email: &str, message: &str) {
        buffer.set_field("name", name).unwrap();
        buffer.set_field("email", email).unwrap();
        buffer.set_field("message", message).unwrap();
    }

    /// Stand-in for the browser timeout the contact section schedules
    fn schedule_expire(
        buffer: Arc<Mutex<FormBuffer>>,
        ticket: DismissTicket,
        delay: Duration,
    ) -> JoinHandle<bool> {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            buffer.lock().unwrap().expire(ticket)
        })
    }

    #[test]
    fn test_contact_submit_scenario() {
        let mut buffer = FormBuffer::new(CONTACT_FORM);
        fill_contact(&mut buffer, "Ada", "a@b.com", "hi");

        let receipt = buffer.submit().unwrap();
        let contact = ContactForm::try_from(receipt.snapshot).unwrap();
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.email, "a@b.com");
        assert_eq!(contact.message, "hi");

        assert_eq!(buffer.field("name"), Some(""));
        assert_eq!(buffer.field("email"), Some(""));
        assert_eq!(buffer.field("message"), Some(""));
        assert!(buffer.is_submitted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submitted_clears_after_feedback_delay() {
        let delay = SiteConfig::default().submit_feedback;
        let buffer = Arc::new(Mutex::new(FormBuffer::new(CONTACT_FORM)));

        let ticket = {
            let mut guard = buffer.lock().unwrap();
            fill_contact(&mut guard, "Ada", "a@b.com", "hi");
            guard.submit().unwrap().ticket
        };
        let timer = schedule_expire(buffer.clone(), ticket, delay);

        tokio::time::sleep(delay - Duration::from_millis(1)).await;
        assert!(buffer.lock().unwrap().is_submitted());

        assert!(timer.await.unwrap());
        assert!(!buffer.lock().unwrap().is_submitted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmit_outlives_first_timer() {
        let delay = SiteConfig::default().submit_feedback;
        let buffer = Arc::new(Mutex::new(FormBuffer::new(CONTACT_FORM)));

        let first = {
            let mut guard = buffer.lock().unwrap();
            fill_contact(&mut guard, "Ada", "a@b.com", "hi");
            guard.submit().unwrap().ticket
        };
        let first_timer = schedule_expire(buffer.clone(), first, delay);

        tokio::time::sleep(Duration::from_millis(1000)).await;

        let second = {
            let mut guard = buffer.lock().unwrap();
            fill_contact(&mut guard, "Grace", "g@h.org", "again");
            guard.submit().unwrap().ticket
        };
        let second_timer = schedule_expire(buffer.clone(), second, delay);

        // First timer fires at 3s and must not clear the second submit's flag
        assert!(!first_timer.await.unwrap());
        assert!(buffer.lock().unwrap().is_submitted());

        assert!(second_timer.await.unwrap());
        assert!(!buffer.lock().unwrap().is_submitted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_before_timer() {
        let delay = SiteConfig::default().submit_feedback;
        let buffer = Arc::new(Mutex::new(FormBuffer::new(CONTACT_FORM)));

        let ticket = {
            let mut guard = buffer.lock().unwrap();
            fill_contact(&mut guard, "Ada", "a@b.com", "hi");
            guard.submit().unwrap().ticket
        };
        let timer = schedule_expire(buffer.clone(), ticket, delay);

        buffer.lock().unwrap().dismiss();
        assert!(!buffer.lock().unwrap().is_submitted());
        assert!(!timer.await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_runs() {
        let delay = SiteConfig::default().submit_feedback;
        let buffer = Arc::new(Mutex::new(FormBuffer::new(CONTACT_FORM)));

        let ticket = {
            let mut guard = buffer.lock().unwrap();
            fill_contact(&mut guard, "Ada", "a@b.com", "hi");
            guard.submit().unwrap().ticket
        };
        let timer = schedule_expire(buffer.clone(), ticket, delay);

        // View torn down: pending timers are cancelled
        timer.abort();
        tokio::time::sleep(delay * 2).await;

        assert!(timer.await.unwrap_err().is_cancelled());
        assert!(buffer.lock().unwrap().is_submitted());
    }

    #[test]
    fn test_faq_accordion_scenario() {
        let mut faq = DisclosureGroup::new();
        assert!(content::FAQS.iter().enumerate().all(|(i, _)| !faq.is_active(&i)));

        faq.toggle(0);
        faq.toggle(2);
        let open: Vec<_> = (0..content::FAQS.len()).filter(|i| faq.is_active(i)).collect();
        assert_eq!(open, vec![2]);

        faq.toggle(2);
        assert!(faq.active().is_none());
    }

    #[test]
    fn test_pricing_hover_scenario() {
        let mut selected = DisclosureGroup::with_active(content::DEFAULT_PLAN);
        let mut hovered = DisclosureGroup::new();

        hovered.select(0usize);
        // Entering the next card before the leave event of the first arrives
        hovered.select(1);
        hovered.release(&0);
        assert!(hovered.is_active(&1));

        selected.select("enterprise");
        assert!(!selected.is_active(&"premium"));
    }

    #[test]
    fn test_pricing_hover_burst_regenerates_per_hover() {
        let config = SiteConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut hovered = DisclosureGroup::new();

        hovered.select(1usize);
        let first = generate(config.particles.pricing_hover, &config.burst_particles, &mut rng);
        hovered.release(&1);
        assert_eq!(hovered.active(), None);

        hovered.select(1);
        let second = generate(config.particles.pricing_hover, &config.burst_particles, &mut rng);

        assert_eq!(first.len(), 5);
        assert_eq!(second.len(), 5);
        assert_ne!(first, second);
        for burst in [&first, &second] {
            for (index, particle) in burst.iter().enumerate() {
                assert_eq!(particle.origin_offset.x, 0.0);
                assert_eq!(particle.origin_offset.y, 0.0);
                assert_eq!(particle.repeat_delay, index as f64 * 0.2);
                assert_eq!(particle.opacity_keyframes, vec![0.0, 0.8, 0.0]);
            }
        }
    }

    #[test]
    fn test_hero_artwork_cycle() {
        let mut cursor = SelectionCursor::new(content::ARTWORKS.to_vec()).unwrap();
        assert_eq!(cursor.current().name, "Ethereal Vision");
        assert_eq!(cursor.advance().name, "Celestial Dream");
        assert_eq!(cursor.advance().name, "Mystic Portal");
        assert_eq!(cursor.advance().name, "Ethereal Vision");
        assert_eq!(cursor.epoch(), 3);
    }

    #[test]
    fn test_section_fields_from_config() {
        let config = SiteConfig::default();
        let mut rng = StdRng::seed_from_u64(5);

        let hero = generate(config.particles.hero, &config.sparkle_particles, &mut rng);
        let faq = generate(config.particles.faq, &config.ambient_particles, &mut rng);
        let service = generate(config.particles.service, &config.drifting_particles, &mut rng);

        assert_eq!(hero.len(), 20);
        assert_eq!(faq.len(), 8);
        assert_eq!(service.len(), 16);
        assert!(
            service
                .iter()
                .all(|p| ParticleRanges::drifting().duration_range().contains(&p.duration))
        );
    }
}
