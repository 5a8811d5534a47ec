//! Global CSS styles for the Birthday Book.
//!
//! Every animation on the card lives here. Effect elements pass their random
//! draws in as custom properties (`--dx`, `--dy`, `--rot`, `--scale-from`,
//! `--scale-to`) plus inline `animation-duration` / `animation-delay`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAGE */
  --page-pink: #ec4899;
  --page-purple: #a855f7;
  --page-indigo: #4f46e5;

  /* BOOK */
  --cover-from: #4f46e5;
  --cover-to: #6b21a8;
  --surprise-from: #fef08a;
  --surprise-to: #f9a8d4;
  --final-from: #12002b;
  --final-via: #3a0ca3;
  --final-to: #7209b7;

  /* ACCENTS */
  --gold: #facc15;
  --purple: #9333ea;
  --neon: #ff77ff;
  --neon-hot: #ff4dff;
  --portrait-ring: #f472b6;
  --sparkle: #fde047;

  /* Geometry */
  --book-width: 340px;
  --book-height: 440px;
  --book-perspective: 1600px;

  /* Transitions */
  --flip-cover: 1.3s;
  --flip-surprise: 1.2s;
  --final-enter: 0.9s;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  min-height: 100vh;
}

/* === Page === */
.card-page {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  background: linear-gradient(to bottom right, var(--page-pink), var(--page-purple), var(--page-indigo));
}

/* === Controls === */
.control-bar {
  position: absolute;
  top: 0.5rem;
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  z-index: 50;
}

.control-btn {
  background: #ffffff;
  border: none;
  border-radius: 0.25rem;
  padding: 0.25rem 0.75rem;
  font-size: 0.875rem;
  cursor: pointer;
}

/* === Book === */
.book-scene {
  perspective: var(--book-perspective);
}

.book {
  position: relative;
  width: var(--book-width);
  height: var(--book-height);
  transform-style: preserve-3d;
}

.leaf {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  border-radius: 1rem;
  transform-origin: left center;
  transform: rotateY(0deg);
}

.cover {
  color: #ffffff;
  background: linear-gradient(to bottom right, var(--cover-from), var(--cover-to));
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
  transition: transform var(--flip-cover) ease-in-out;
}

.surprise-page {
  background: linear-gradient(to bottom right, var(--surprise-from), var(--surprise-to));
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
  transition: transform var(--flip-surprise) ease-in-out;
}

.cover--flipped,
.surprise-page--flipped {
  transform: rotateY(-160deg);
  pointer-events: none;
}

.cover__title {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.surprise-page__title {
  font-size: 1.25rem;
  font-weight: 700;
}

.btn-open {
  padding: 0.75rem 1.5rem;
  border: none;
  border-radius: 9999px;
  background: var(--gold);
  color: #000000;
  font-weight: 600;
  cursor: pointer;
}

.btn-next {
  margin-top: 1.5rem;
  padding: 0.5rem 1.25rem;
  border: none;
  border-radius: 9999px;
  background: var(--purple);
  color: #ffffff;
  cursor: pointer;
}

/* === Final Page === */
.final-page {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 1.25rem;
  text-align: center;
  border-radius: 1.5rem;
  background: linear-gradient(to bottom right, var(--final-from), var(--final-via), var(--final-to));
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
  animation: final-enter var(--final-enter) ease-out both;
}

@keyframes final-enter {
  from { opacity: 0; transform: scale(0.85) rotateX(-15deg); }
  to { opacity: 1; transform: scale(1) rotateX(0deg); }
}

.neon-ring {
  position: absolute;
  inset: 0.5rem;
  border-radius: 1.5rem;
  border: 1px solid rgba(255, 255, 255, 0.2);
  animation: neon-pulse 2s ease-in-out infinite;
}

@keyframes neon-pulse {
  0%, 100% { box-shadow: 0 0 10px var(--neon); }
  50% { box-shadow: 0 0 35px var(--neon); }
}

.portrait {
  position: relative;
  z-index: 10;
  width: 9rem;
  height: 9rem;
  object-fit: cover;
  border-radius: 50%;
  margin-bottom: 0.75rem;
  border: 4px solid var(--portrait-ring);
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3);
  animation: portrait-enter 0.8s ease-out both;
}

@keyframes portrait-enter {
  from { opacity: 0; transform: scale(0.7); }
  to { opacity: 1; transform: scale(1); }
}

.final-page__name {
  position: relative;
  z-index: 10;
  font-size: 2.25rem;
  font-weight: 800;
  color: #ffffff;
  margin-bottom: 0.25rem;
  letter-spacing: 0.025em;
  animation: name-bob 1.6s ease-in-out infinite;
}

@keyframes name-bob {
  0%, 100% { transform: translateY(0); text-shadow: 0 0 5px #ffffff; }
  50% { transform: translateY(-8px); text-shadow: 0 0 25px var(--neon-hot); }
}

.final-page__message {
  position: relative;
  z-index: 10;
  color: rgba(255, 255, 255, 0.95);
  font-size: 1rem;
  line-height: 1.625;
  margin-bottom: 1rem;
  animation: shimmer 2.2s ease-in-out infinite;
}

@keyframes shimmer {
  0%, 100% { opacity: 0.7; }
  50% { opacity: 1; }
}

.btn-wishes {
  position: relative;
  z-index: 10;
  margin-top: 0.5rem;
  padding: 0.5rem 1.5rem;
  border: none;
  border-radius: 9999px;
  background: linear-gradient(to right, #f472b6, var(--gold));
  color: #000000;
  font-weight: 600;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
  cursor: pointer;
  transition: transform 150ms ease;
}

.btn-wishes:hover { transform: scale(1.08); }
.btn-wishes:active { transform: scale(0.95); }

/* === Corner Bursts === */
.corner-burst {
  position: absolute;
  font-size: 1.5rem;
  animation-iteration-count: infinite;
  animation-timing-function: ease-in-out;
}

.corner-burst--top-left { top: 0.75rem; left: 0.75rem; animation-name: burst-top-left; }
.corner-burst--top-right { top: 0.75rem; right: 0.75rem; animation-name: burst-top-right; }
.corner-burst--bottom-left { bottom: 0.75rem; left: 0.75rem; animation-name: burst-bottom-left; }
.corner-burst--bottom-right { bottom: 0.75rem; right: 0.75rem; animation-name: burst-bottom-right; }

@keyframes burst-top-left {
  0% { transform: translate(0, 0); opacity: 1; }
  50% { transform: translate(80px, -60px); opacity: 1; }
  100% { transform: translate(140px, -120px); opacity: 0; }
}

@keyframes burst-top-right {
  0% { transform: translate(0, 0); opacity: 1; }
  50% { transform: translate(-80px, -60px); opacity: 1; }
  100% { transform: translate(-140px, -120px); opacity: 0; }
}

@keyframes burst-bottom-left {
  0% { transform: translate(0, 0); opacity: 1; }
  50% { transform: translate(90px, 70px); opacity: 1; }
  100% { transform: translate(150px, 130px); opacity: 0; }
}

@keyframes burst-bottom-right {
  0% { transform: translate(0, 0); opacity: 1; }
  50% { transform: translate(-90px, 70px); opacity: 1; }
  100% { transform: translate(-150px, 130px); opacity: 0; }
}

/* === Effects === */
.fx-layer {
  position: absolute;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
}

.fx {
  position: absolute;
  left: 50%;
  top: 50%;
  animation-fill-mode: forwards;
  animation-timing-function: ease-out;
}

.fx-heart {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  font-size: 1.5rem;
  animation-name: heart-float;
}

.fx-heart__name {
  color: #ffffff;
  font-weight: 700;
}

@keyframes heart-float {
  from { transform: translate(0, 0) rotate(0deg) scale(var(--scale-from)); opacity: 1; }
  to { transform: translate(var(--dx), var(--dy)) rotate(var(--rot)) scale(var(--scale-to)); opacity: 0; }
}

.fx-sparkle {
  color: var(--sparkle);
  animation-name: sparkle-scatter;
}

@keyframes sparkle-scatter {
  from { transform: translate(0, 0) scale(var(--scale-from)); opacity: 1; }
  to { transform: translate(var(--dx), var(--dy)) scale(var(--scale-to)); opacity: 0; }
}

.fx-firework {
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 50%;
  background: #ffffff;
  animation-name: firework-pop;
  animation-fill-mode: both;
}

@keyframes firework-pop {
  0% { transform: scale(var(--scale-from)); opacity: 1; }
  50% { transform: scale(var(--scale-to)); opacity: 1; }
  100% { transform: scale(var(--scale-from)); opacity: 0; }
}

.fx-mini-sparkle {
  color: var(--sparkle);
  animation-name: mini-drift;
  animation-fill-mode: both;
}

@keyframes mini-drift {
  0% { transform: translate(0, 0); opacity: 0; }
  50% { opacity: 1; }
  100% { transform: translate(var(--dx), var(--dy)); opacity: 0; }
}
"#;
