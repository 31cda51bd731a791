use crate::core::constants::FFT_SIZE;
use web_sys as web;

/// Audio element routed through an analyser to the speakers.
pub struct AudioGraph {
    pub ctx: web::AudioContext,
    pub element: web::HtmlAudioElement,
    pub analyser: Option<web::AnalyserNode>,
}

pub fn build_audio_graph(volume: f64) -> anyhow::Result<AudioGraph> {
    let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let element = web::HtmlAudioElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    element.set_preload("auto");
    element.set_volume(volume);

    let source = ctx
        .create_media_element_source(&element)
        .map_err(|e| anyhow::anyhow!("MediaElementAudioSourceNode error: {:?}", e))?;
    let analyser = create_analyser(&ctx);
    match &analyser {
        Some(a) => {
            _ = source.connect_with_audio_node(a);
            _ = a.connect_with_audio_node(&ctx.destination());
        }
        // Still audible without visuals
        None => {
            _ = source.connect_with_audio_node(&ctx.destination());
        }
    }
    Ok(AudioGraph {
        ctx,
        element,
        analyser,
    })
}

pub fn create_analyser(ctx: &web::AudioContext) -> Option<web::AnalyserNode> {
    match web::AnalyserNode::new(ctx) {
        Ok(a) => {
            a.set_fft_size(FFT_SIZE);
            Some(a)
        }
        Err(e) => {
            log::error!("AnalyserNode error: {:?}", e);
            None
        }
    }
}

/// Snapshot buffer sized for the analyser (empty without one).
pub fn snapshot_buffer(analyser: Option<&web::AnalyserNode>) -> Vec<u8> {
    let bins = analyser.map(|a| a.frequency_bin_count() as usize).unwrap_or(0);
    vec![0u8; bins]
}

/// Browsers start contexts suspended until a user gesture.
pub fn resume_if_suspended(ctx: &web::AudioContext) {
    if ctx.state() == web::AudioContextState::Suspended {
        _ = ctx.resume();
    }
}
